//! Comparators
//!
//! A [`Compare`] decides, for two elements, whether the first ranks strictly below the
//! second. The queue keeps the element nothing ranks above at its top, so [`Less`] (the
//! default) yields a max-queue and [`Greater`] yields a min-queue.
//!
//! Comparators are allowed to fail. Any error they return is absorbed by the queue and
//! reported as [`QueueError::Comparator`](crate::QueueError::Comparator). The queue then
//! holds the same elements as before the call.
//!
//! # Example
//!
//! ```rust
//! use meldable_queue::compare::{from_fn, Greater};
//! use meldable_queue::pairing::PairingQueue;
//!
//! let mut min_first = PairingQueue::with_comparator(Greater);
//! min_first.push(4).unwrap();
//! min_first.push(2).unwrap();
//! assert_eq!(min_first.top(), Ok(&2));
//!
//! // Order by string length, refusing to compare empty strings
//! let by_len = from_fn(|a: &&str, b: &&str| {
//!     if a.is_empty() || b.is_empty() {
//!         Err("empty string")
//!     } else {
//!         Ok(a.len() < b.len())
//!     }
//! });
//! let mut words = PairingQueue::with_comparator(by_len);
//! words.push("pear").unwrap();
//! words.push("fig").unwrap();
//! assert!(words.push("").is_err());
//! assert_eq!(words.len(), 2);
//! assert_eq!(words.top(), Ok(&"pear"));
//! ```

use std::convert::Infallible;

/// Ordering relation consumed by the queue
///
/// `ranks_below(a, b)` returns `Ok(true)` when `a` has strictly lower priority than `b`.
/// The relation should be a strict weak ordering; the queue calls it in a fixed, documented
/// pattern (one call per meld, plus one call per adjacent pair when validating a pop), so
/// stateful comparators observe a deterministic sequence of calls.
pub trait Compare<T: ?Sized> {
    /// Failure reported by the comparator; never surfaced to queue callers
    type Error;

    /// Returns whether `a` ranks strictly below `b`
    fn ranks_below(&mut self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

/// `a < b`: the greatest element is on top
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    type Error = Infallible;

    fn ranks_below(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a < b)
    }
}

/// `a > b`: the smallest element is on top
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    type Error = Infallible;

    fn ranks_below(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a > b)
    }
}

/// Comparator backed by a fallible closure, see [`from_fn`]
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps `f(a, b) -> Result<bool, E>` as a [`Compare`]
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<T: ?Sized, E, F> Compare<T> for FromFn<F>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    type Error = E;

    fn ranks_below(&mut self, a: &T, b: &T) -> Result<bool, E> {
        (self.0)(a, b)
    }
}

#[cfg(feature = "catch-unwind")]
pub use self::unwind::CatchUnwind;

#[cfg(feature = "catch-unwind")]
mod unwind {
    use std::any::Any;
    use std::panic::{self, AssertUnwindSafe};

    use super::Compare;

    /// Comparator backed by an infallible closure that may panic
    ///
    /// A panic inside the closure is caught and turned into a comparator error, so the queue
    /// rolls back instead of unwinding through a half-restructured heap. The panic hook still
    /// runs as usual.
    #[derive(Debug, Clone, Copy)]
    pub struct CatchUnwind<F>(F);

    impl<F> CatchUnwind<F> {
        /// Wraps `f(a, b) -> bool`
        pub fn new(f: F) -> Self {
            CatchUnwind(f)
        }
    }

    impl<T: ?Sized, F> Compare<T> for CatchUnwind<F>
    where
        F: FnMut(&T, &T) -> bool,
    {
        type Error = Box<dyn Any + Send + 'static>;

        fn ranks_below(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
            let f = &mut self.0;
            panic::catch_unwind(AssertUnwindSafe(|| f(a, b)))
        }
    }
}
