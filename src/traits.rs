//! Common traits and errors for meldable queues
//!
//! - [`QueueError`]: the error taxonomy shared by every fallible queue operation
//! - [`MeldableQueue`]: the queue interface, implemented by
//!   [`PairingQueue`](crate::pairing::PairingQueue) and by `std::collections::BinaryHeap`
//!
//! The `BinaryHeap` implementation exists so generic code (and the test suite) can run the
//! same workload against the standard library as a reference model.

use std::collections::BinaryHeap;

use thiserror::Error;

/// Error type for queue operations
///
/// The comparator's own error value never appears here: any comparator failure is
/// reported as [`QueueError::Comparator`], whatever its original type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `top` or `pop` was called on a queue with no elements
    #[error("cannot perform operation on empty queue")]
    EmptyContainer,
    /// The comparator failed; the queue kept its elements, length and top
    #[error("comparator failed, operation rolled back")]
    Comparator,
}

/// Base trait for mergeable priority queues
///
/// Unlike `BinaryHeap`, mutating operations return `Result` because the ordering may be
/// supplied by a comparator that can fail. A failed operation leaves the queue unchanged.
///
/// # Example
///
/// ```rust
/// use meldable_queue::MeldableQueue;
/// use meldable_queue::pairing::PairingQueue;
///
/// let mut queue: PairingQueue<i32> = PairingQueue::new();
/// queue.push(3).unwrap();
/// queue.push(7).unwrap();
///
/// let mut other: PairingQueue<i32> = PairingQueue::new();
/// other.push(5).unwrap();
///
/// MeldableQueue::merge(&mut queue, &mut other).unwrap();
/// assert!(other.is_empty());
/// assert_eq!(queue.peek(), Some(&7));
/// ```
pub trait MeldableQueue<T> {
    /// Returns true if the queue has no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Errors
    /// [`QueueError::Comparator`] if ordering the new element failed.
    fn push(&mut self, item: T) -> Result<(), QueueError>;

    /// Returns the highest-priority element without removing it
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// [`QueueError::EmptyContainer`] on an empty queue, [`QueueError::Comparator`] if
    /// restructuring the remaining elements failed.
    fn pop(&mut self) -> Result<T, QueueError>;

    /// Moves every element of `other` into `self`, leaving `other` empty
    ///
    /// # Errors
    /// [`QueueError::Comparator`] if the comparator failed; both queues are then unchanged.
    fn merge(&mut self, other: &mut Self) -> Result<(), QueueError>;
}

impl<T: Ord> MeldableQueue<T> for BinaryHeap<T> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, item: T) -> Result<(), QueueError> {
        BinaryHeap::push(self, item);
        Ok(())
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        BinaryHeap::pop(self).ok_or(QueueError::EmptyContainer)
    }

    fn merge(&mut self, other: &mut Self) -> Result<(), QueueError> {
        self.append(other);
        Ok(())
    }
}
