//! Generic tests for all MeldableQueue implementations
//!
//! Every test here runs against `PairingQueue` and against `std::collections::BinaryHeap`,
//! which serves as the reference model.

use std::collections::BinaryHeap;

use meldable_queue::{MeldableQueue, PairingQueue, QueueError};

/// Test that an empty queue behaves correctly
fn test_empty_queue<Q: MeldableQueue<i32> + Default>() {
    let mut queue = Q::default();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.pop(), Err(QueueError::EmptyContainer));
}

/// Test the push / pop / merge scenario from the crate docs
fn test_scenario<Q: MeldableQueue<i32> + Default>() {
    let mut queue = Q::default();
    for x in [5, 3, 8, 1, 9] {
        queue.push(x).unwrap();
    }
    assert_eq!(queue.peek(), Some(&9));
    assert_eq!(queue.pop(), Ok(9));
    assert_eq!(queue.peek(), Some(&8));

    let mut other = Q::default();
    other.push(4).unwrap();
    other.push(2).unwrap();
    queue.merge(&mut other).unwrap();

    assert!(other.is_empty());
    assert_eq!(other.len(), 0);
    assert_eq!(queue.len(), 6);
    assert_eq!(queue.peek(), Some(&8));

    let mut drained = Vec::new();
    while let Ok(x) = queue.pop() {
        drained.push(x);
    }
    assert_eq!(drained, vec![8, 5, 4, 3, 2, 1]);
}

/// Test merging with an empty queue on either side
fn test_merge_empty<Q: MeldableQueue<i32> + Default>() {
    let mut queue = Q::default();
    queue.push(5).unwrap();
    queue.push(1).unwrap();

    let mut empty = Q::default();
    queue.merge(&mut empty).unwrap();
    assert_eq!(queue.len(), 2);
    assert!(empty.is_empty());

    let mut target = Q::default();
    target.merge(&mut queue).unwrap();
    assert_eq!(target.len(), 2);
    assert_eq!(target.peek(), Some(&5));
    assert!(queue.is_empty());
}

/// Test that equal elements are all kept
fn test_duplicates<Q: MeldableQueue<i32> + Default>() {
    let mut queue = Q::default();
    for _ in 0..4 {
        queue.push(7).unwrap();
    }
    queue.push(1).unwrap();
    for _ in 0..4 {
        assert_eq!(queue.pop(), Ok(7));
    }
    assert_eq!(queue.pop(), Ok(1));
    assert!(queue.is_empty());
}

/// Test ascending, descending and interleaved insertion orders
fn test_insertion_orders<Q: MeldableQueue<i32> + Default>() {
    let ascending: Vec<i32> = (0..100).collect();
    let descending: Vec<i32> = (0..100).rev().collect();
    let interleaved: Vec<i32> = (0..100).map(|i| if i % 2 == 0 { i } else { 100 - i }).collect();

    for order in [ascending, descending, interleaved] {
        let mut queue = Q::default();
        for &x in &order {
            queue.push(x).unwrap();
        }
        let mut expected = order.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        let mut drained = Vec::new();
        while let Ok(x) = queue.pop() {
            drained.push(x);
        }
        assert_eq!(drained, expected);
    }
}

/// Test peek is idempotent
fn test_peek_idempotent<Q: MeldableQueue<i32> + Default>() {
    let mut queue = Q::default();
    queue.push(3).unwrap();
    queue.push(11).unwrap();
    assert_eq!(queue.peek(), Some(&11));
    assert_eq!(queue.peek(), Some(&11));
    assert_eq!(queue.len(), 2);
}

/// Test alternating push and pop, tracking len
fn test_alternating<Q: MeldableQueue<i32> + Default>() {
    let mut queue = Q::default();
    let mut expected_len = 0;
    for i in 0..200 {
        queue.push(i).unwrap();
        queue.push(1000 - i).unwrap();
        expected_len += 2;
        assert!(queue.pop().is_ok());
        expected_len -= 1;
        assert_eq!(queue.len(), expected_len);
    }
    let mut last = i32::MAX;
    while let Ok(x) = queue.pop() {
        assert!(x <= last);
        last = x;
    }
}

/// Test repeated merges into one queue
fn test_many_merges<Q: MeldableQueue<i32> + Default>() {
    let mut target = Q::default();
    for chunk in 0..20 {
        let mut part = Q::default();
        for i in 0..10 {
            part.push(chunk * 10 + i).unwrap();
        }
        target.merge(&mut part).unwrap();
        assert!(part.is_empty());
    }
    assert_eq!(target.len(), 200);
    for expected in (0..200).rev() {
        assert_eq!(target.pop(), Ok(expected));
    }
}

macro_rules! queue_tests {
    ($module:ident, $queue:ty) => {
        mod $module {
            use super::*;

            #[test]
            fn empty() {
                test_empty_queue::<$queue>();
            }

            #[test]
            fn scenario() {
                test_scenario::<$queue>();
            }

            #[test]
            fn merge_empty() {
                test_merge_empty::<$queue>();
            }

            #[test]
            fn duplicates() {
                test_duplicates::<$queue>();
            }

            #[test]
            fn insertion_orders() {
                test_insertion_orders::<$queue>();
            }

            #[test]
            fn peek_idempotent() {
                test_peek_idempotent::<$queue>();
            }

            #[test]
            fn alternating() {
                test_alternating::<$queue>();
            }

            #[test]
            fn many_merges() {
                test_many_merges::<$queue>();
            }
        }
    };
}

queue_tests!(pairing, PairingQueue<i32>);
queue_tests!(binary_heap, BinaryHeap<i32>);
