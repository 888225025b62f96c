//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use meldable_queue::{Compare, PairingQueue};

/// Max-first comparator that counts its calls and can be armed to fail
///
/// Clones share the counter and the trigger, so a queue, its copies and queues merged
/// into it all observe the same call sequence.
#[derive(Debug, Clone, Default)]
pub struct Flaky {
    calls: Rc<Cell<usize>>,
    fail_at: Rc<Cell<Option<usize>>>,
    fail_every: Rc<Cell<Option<usize>>>,
}

impl Flaky {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn reset_calls(&self) {
        self.calls.set(0);
    }

    /// Fails on the `n`th call from now (1-based)
    pub fn fail_in(&self, n: usize) {
        self.fail_at.set(Some(self.calls.get() + n));
    }

    /// Fails whenever the running call count is a multiple of `k`
    pub fn fail_every(&self, k: usize) {
        self.fail_every.set(Some(k));
    }

    pub fn disarm(&self) {
        self.fail_at.set(None);
        self.fail_every.set(None);
    }
}

impl Compare<i32> for Flaky {
    type Error = String;

    fn ranks_below(&mut self, a: &i32, b: &i32) -> Result<bool, String> {
        let n = self.calls.get() + 1;
        self.calls.set(n);
        if self.fail_at.get() == Some(n) {
            return Err(format!("armed failure at call {n}"));
        }
        if let Some(k) = self.fail_every.get() {
            if n % k == 0 {
                return Err(format!("periodic failure at call {n}"));
            }
        }
        Ok(a < b)
    }
}

/// Pops a copy of `queue` empty with failures disarmed, returning elements in pop order
///
/// Disarms the shared comparator, so re-arm it afterwards if needed.
pub fn snapshot(queue: &PairingQueue<i32, Flaky>) -> Vec<i32> {
    queue.comparator().disarm();
    let mut copy = queue.clone();
    let mut out = Vec::with_capacity(copy.len());
    while let Ok(x) = copy.pop() {
        out.push(x);
    }
    out
}

/// Values sorted the way a max-queue pops them
pub fn sorted_desc(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}
