//! Pairing-heap priority queue
//!
//! A pairing heap is a heap-ordered multi-way tree with:
//! - O(1) push and merge (one comparator call each)
//! - O(log n) amortized pop
//!
//! # Failure safety
//!
//! The comparator may fail. Every mutating operation either completes or leaves the queue
//! with the same elements, the same length and the same top:
//!
//! - `push` and `merge` perform a single meld, which calls the comparator before touching
//!   any link.
//! - `pop` has to meld all children of the old root. It first walks the child chain
//!   comparing every adjacent pair without mutating anything (validation pass), and only
//!   then consolidates the chain (merge pass). The merge pass also compares pair winners
//!   with each other, so it can still fail. The partial subtrees are then hung back under
//!   the old root, which stays on top with the same elements below it.
//!
//! # Example
//!
//! ```rust
//! use meldable_queue::pairing::PairingQueue;
//! use meldable_queue::QueueError;
//!
//! let mut queue = PairingQueue::new();
//! for x in [5, 3, 8, 1, 9] {
//!     queue.push(x).unwrap();
//! }
//! assert_eq!(queue.top(), Ok(&9));
//! assert_eq!(queue.pop(), Ok(9));
//!
//! let mut other = PairingQueue::new();
//! other.push(4).unwrap();
//! queue.merge(&mut other).unwrap();
//! assert!(other.is_empty());
//! assert_eq!(queue.len(), 5);
//!
//! queue.clear();
//! assert_eq!(queue.pop(), Err(QueueError::EmptyContainer));
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::compare::{Compare, Less};
use crate::node::{Link, Node};
use crate::traits::{MeldableQueue, QueueError};

/// Pairing-heap priority queue ordered by a [`Compare`]
///
/// With the default [`Less`] comparator the greatest element is on top.
pub struct PairingQueue<T, C = Less> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

fn ranks_below<T, C: Compare<T>>(cmp: &mut C, a: &T, b: &T) -> Result<bool, QueueError> {
    cmp.ranks_below(a, b).map_err(|_| QueueError::Comparator)
}

/// Hangs the losing root under the winning one
fn link<T>(mut a: Box<Node<T>>, mut b: Box<Node<T>>, b_wins: bool) -> Box<Node<T>> {
    if b_wins {
        b.adopt(a);
        b
    } else {
        a.adopt(b);
        a
    }
}

/// Melds `from` into `into`
///
/// Calls the comparator once when both sides are present, as `ranks_below(into, from)`.
/// On success `from` is left empty. On failure neither link has been touched.
fn meld<T, C: Compare<T>>(
    cmp: &mut C,
    into: &mut Link<T>,
    from: &mut Link<T>,
) -> Result<(), QueueError> {
    let from_wins = match (into.as_deref(), from.as_deref()) {
        (Some(a), Some(b)) => ranks_below(cmp, &a.value, &b.value)?,
        _ => {
            if into.is_none() {
                *into = from.take();
            }
            return Ok(());
        }
    };
    if let (Some(a), Some(b)) = (into.take(), from.take()) {
        *into = Some(link(a, b, from_wins));
    }
    Ok(())
}

/// Subtrees detached from the child chain of `parent` during the merge pass
///
/// `parent.child` keeps the part of the chain not yet visited and `pieces` the sibling-free
/// subtrees built so far. Dropping it hangs every remaining piece back under `parent`, so
/// a merge pass cut short by a failing or panicking comparator loses nothing.
struct Detached<'a, T> {
    parent: &'a mut Node<T>,
    pieces: Vec<Box<Node<T>>>,
}

impl<'a, T> Detached<'a, T> {
    fn new(parent: &'a mut Node<T>) -> Self {
        Self {
            parent,
            pieces: Vec::new(),
        }
    }

    /// Moves the first unvisited child onto `pieces`
    fn detach_first(&mut self) -> bool {
        match self.parent.child.take() {
            Some(mut node) => {
                self.parent.child = node.sibling.take();
                self.pieces.push(node);
                true
            }
            None => false,
        }
    }

    /// Melds the two most recent pieces as `meld(left, right)`
    ///
    /// Both pieces stay in place if the comparator fails.
    fn meld_last<C: Compare<T>>(&mut self, cmp: &mut C) -> Result<(), QueueError> {
        let right_wins = match self.pieces.as_slice() {
            [.., left, right] => ranks_below(cmp, &left.value, &right.value)?,
            _ => return Ok(()),
        };
        if let (Some(right), Some(left)) = (self.pieces.pop(), self.pieces.pop()) {
            self.pieces.push(link(left, right, right_wins));
        }
        Ok(())
    }
}

impl<T> Drop for Detached<'_, T> {
    fn drop(&mut self) {
        for piece in self.pieces.drain(..) {
            self.parent.adopt(piece);
        }
    }
}

/// Validation pass: compares every adjacent pair of the chain starting at `first`
fn compare_siblings<T, C: Compare<T>>(
    cmp: &mut C,
    first: Option<&Node<T>>,
) -> Result<(), QueueError> {
    let mut current = first;
    while let Some(node) = current {
        let Some(next) = node.sibling.as_deref() else {
            break;
        };
        ranks_below(cmp, &node.value, &next.value)?;
        current = Some(next);
    }
    Ok(())
}

/// Merge pass: consolidates the children of `parent` into one subtree and returns it
///
/// Melds the chain pairwise from left to right, then folds the pairs from right to left,
/// `meld(pair, rest)`. On failure every partial subtree is hung back under `parent`, which
/// still outranks all of them, and `parent` keeps the same elements.
fn merge_siblings<T, C: Compare<T>>(
    cmp: &mut C,
    parent: &mut Node<T>,
) -> Result<Link<T>, QueueError> {
    let mut detached = Detached::new(parent);
    while detached.detach_first() {
        if !detached.detach_first() {
            break;
        }
        detached.meld_last(cmp)?;
    }
    trace!(pairs = detached.pieces.len(), "consolidating sibling chain");

    while detached.pieces.len() > 1 {
        detached.meld_last(cmp)?;
    }
    Ok(detached.pieces.pop())
}

impl<T> PairingQueue<T, Less> {
    /// Creates an empty max-queue
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<T, C> PairingQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue has no elements
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the top element
    ///
    /// # Errors
    /// [`QueueError::EmptyContainer`] if the queue is empty.
    pub fn top(&self) -> Result<&T, QueueError> {
        self.peek().ok_or(QueueError::EmptyContainer)
    }

    /// Returns the top element, or `None` if the queue is empty
    pub fn peek(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.value)
    }

    /// Returns the comparator
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes every element
    pub fn clear(&mut self) {
        if let Some(mut root) = self.root.take() {
            root.release_descendants();
        }
        self.len = 0;
    }
}

impl<T, C: Compare<T>> PairingQueue<T, C> {
    /// Inserts `value`
    ///
    /// # Errors
    /// [`QueueError::Comparator`] if the comparator failed. `value` is dropped and the
    /// queue is unchanged.
    pub fn push(&mut self, value: T) -> Result<(), QueueError> {
        let mut single = Some(Node::singleton(value));
        if let Err(err) = meld(&mut self.cmp, &mut self.root, &mut single) {
            debug!(len = self.len, "push rolled back, comparator failed");
            return Err(err);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    /// [`QueueError::EmptyContainer`] if the queue is empty, [`QueueError::Comparator`] if
    /// the comparator failed while consolidating the remaining elements. The queue then
    /// holds the same elements under the same top.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        let Some(root) = self.root.as_deref_mut() else {
            return Err(QueueError::EmptyContainer);
        };
        let consolidated = compare_siblings(&mut self.cmp, root.child.as_deref())
            .and_then(|()| merge_siblings(&mut self.cmp, root));
        let rest = match consolidated {
            Ok(rest) => rest,
            Err(err) => {
                debug!(len = self.len, "pop rolled back, comparator failed");
                return Err(err);
            }
        };

        // the old root has no children left and is swapped out whole
        let top = std::mem::replace(&mut self.root, rest).map(|root| root.value);
        self.len -= 1;
        top.ok_or(QueueError::EmptyContainer)
    }

    /// Moves every element of `other` into `self`, leaving `other` empty
    ///
    /// Uses `self`'s comparator. Calls it at most once.
    ///
    /// # Errors
    /// [`QueueError::Comparator`] if the comparator failed. Both queues are then unchanged.
    pub fn merge(&mut self, other: &mut Self) -> Result<(), QueueError> {
        if let Err(err) = meld(&mut self.cmp, &mut self.root, &mut other.root) {
            debug!(
                len = self.len,
                other_len = other.len,
                "merge rolled back, comparator failed"
            );
            return Err(err);
        }
        self.len += other.len;
        other.len = 0;
        Ok(())
    }
}

impl<T, C: Default> Default for PairingQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Drop for PairingQueue<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, C: Clone> Clone for PairingQueue<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.as_deref().map(Node::duplicate),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }

    /// Releases `self`'s elements, then deep-copies `source`'s
    ///
    /// An empty `source` leaves `self` empty.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.as_deref().map(Node::duplicate);
        self.len = source.len;
        self.cmp.clone_from(&source.cmp);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PairingQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingQueue")
            .field("len", &self.len)
            .field("top", &self.peek())
            .finish()
    }
}

impl<T, C: Compare<T>> MeldableQueue<T> for PairingQueue<T, C> {
    fn is_empty(&self) -> bool {
        PairingQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        PairingQueue::len(self)
    }

    fn push(&mut self, item: T) -> Result<(), QueueError> {
        PairingQueue::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        PairingQueue::peek(self)
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        PairingQueue::pop(self)
    }

    fn merge(&mut self, other: &mut Self) -> Result<(), QueueError> {
        PairingQueue::merge(self, other)
    }
}
