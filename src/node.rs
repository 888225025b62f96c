//! Pairing-heap nodes
//!
//! A multi-way tree encoded as a binary tree: `child` points at the first subtree of a node,
//! `sibling` at the next subtree of the same parent. Every node exclusively owns both links,
//! so there are no back-pointers and the whole graph is released by dropping its root.
//!
//! Dropping a `Box<Node<T>>` the default way recurses once per link, which overflows the
//! stack on long sibling chains. Large graphs are therefore released through
//! [`Node::release_descendants`] and duplicated through [`Node::duplicate`], both of which
//! walk the graph with an explicit work stack.

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) child: Link<T>,
    pub(crate) sibling: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn singleton(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            child: None,
            sibling: None,
        })
    }

    /// Makes `loser` the first child of `self`
    ///
    /// The previous children become the loser's sibling chain. `loser` must not be part of
    /// a chain itself.
    pub(crate) fn adopt(&mut self, mut loser: Box<Node<T>>) {
        debug_assert!(loser.sibling.is_none());
        loser.sibling = self.child.take();
        self.child = Some(loser);
    }

    /// Releases every node reachable from `self`, excluding `self`
    pub(crate) fn release_descendants(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.child.take());
        stack.extend(self.sibling.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.child.take());
            stack.extend(node.sibling.take());
            // `node` now has no links and drops without recursing
        }
    }

    /// Number of nodes reachable from `self`, including `self`
    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        let mut stack = vec![self];
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.child.as_deref());
            stack.extend(node.sibling.as_deref());
        }
        count
    }
}

/// Subtrees rebuilt so far by [`Node::duplicate`]
///
/// Released iteratively when dropped, so a `clone` that panics halfway through a long chain
/// unwinds without recursing.
struct Rebuilt<T>(Vec<Box<Node<T>>>);

impl<T> Drop for Rebuilt<T> {
    fn drop(&mut self) {
        for node in &mut self.0 {
            node.release_descendants();
        }
    }
}

impl<T: Clone> Node<T> {
    /// Deep copy of `self`, its subtrees and its sibling chain
    ///
    /// The graph is first flattened in pre-order (node, child subtree, sibling subtree), then
    /// rebuilt back to front: when a node is reached in reverse, its rebuilt child subtree is
    /// on top of the stack and its rebuilt sibling subtree right below.
    pub(crate) fn duplicate(&self) -> Box<Node<T>> {
        let mut order: Vec<&Node<T>> = Vec::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            order.push(node);
            pending.extend(node.sibling.as_deref());
            pending.extend(node.child.as_deref());
        }

        let mut built = Rebuilt(Vec::with_capacity(order.len()));
        for node in order.into_iter().rev() {
            let value = node.value.clone();
            let child = if node.child.is_some() { built.0.pop() } else { None };
            let sibling = if node.sibling.is_some() { built.0.pop() } else { None };
            built.0.push(Box::new(Node {
                value,
                child,
                sibling,
            }));
        }

        debug_assert_eq!(built.0.len(), 1);
        match built.0.pop() {
            Some(root) => root,
            // the loop always pushes `self` last
            None => Node::singleton(self.value.clone()),
        }
    }
}
