//! Meldable priority queue
//!
//! This crate provides a pairing-heap priority queue, [`PairingQueue`], with:
//!
//! - O(1) `push`, `top` and `merge`; O(log n) amortized `pop`
//! - in-place `merge` that moves every element out of the source queue
//! - a user-supplied, possibly stateful and possibly failing [`Compare`] ordering
//! - strong failure safety: when the comparator fails, `push`, `pop` and `merge` report
//!   [`QueueError::Comparator`] and leave every queue involved with the elements it had
//!
//! # Example
//!
//! ```rust
//! use meldable_queue::{PairingQueue, QueueError};
//!
//! let mut queue = PairingQueue::new();
//! for x in [5, 3, 8, 1, 9] {
//!     queue.push(x).unwrap();
//! }
//! assert_eq!(queue.top(), Ok(&9));
//! queue.pop().unwrap();
//!
//! let mut other = PairingQueue::new();
//! other.push(4).unwrap();
//! other.push(2).unwrap();
//! queue.merge(&mut other).unwrap();
//! assert!(other.is_empty());
//! assert_eq!(queue.len(), 6);
//!
//! let mut drained = Vec::new();
//! while let Ok(x) = queue.pop() {
//!     drained.push(x);
//! }
//! assert_eq!(drained, [8, 5, 4, 3, 2, 1]);
//! assert_eq!(queue.top(), Err(QueueError::EmptyContainer));
//! ```

pub mod compare;
mod node;
pub mod pairing;
pub mod traits;

pub use compare::{Compare, Greater, Less};
pub use pairing::PairingQueue;
pub use traits::{MeldableQueue, QueueError};
