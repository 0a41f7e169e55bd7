//! Shared helpers for integration tests

#![allow(dead_code)]

use coinbnb_core::branch_and_bound::StrategyBase;
use coinbnb_core::{EvaluationResult, NextAction, SearchStrategy};
use std::cell::Cell;
use std::collections::HashMap;

/// Strategy that never accepts and never prunes, counting every call
pub struct CountingStrategy {
    base: StrategyBase,
    pub update_calls: Cell<usize>,
    pub evaluate_calls: usize,
}

impl CountingStrategy {
    pub fn new(values: &[i64], target: i64) -> Self {
        Self {
            base: StrategyBase::new(values, target),
            update_calls: Cell::new(0),
            evaluate_calls: 0,
        }
    }
}

impl SearchStrategy for CountingStrategy {
    fn target(&self) -> i64 {
        self.base.target()
    }

    fn update_sum(&self, action: NextAction, selection: &mut [i64], depth: usize, sum: i64) -> i64 {
        self.update_calls.set(self.update_calls.get() + 1);
        self.base.update_sum(action, selection, depth, sum)
    }

    fn evaluate(&mut self, _selection: &[i64], _depth: usize, _sum: i64) -> EvaluationResult {
        self.evaluate_calls += 1;
        EvaluationResult::Continue
    }
}

/// Whether every value of `subset` can be taken from a distinct slot of `input`
pub fn is_sub_multiset(subset: &[i64], input: &[i64]) -> bool {
    let mut available: HashMap<i64, usize> = HashMap::new();
    for value in input {
        *available.entry(*value).or_insert(0) += 1;
    }

    subset.iter().all(|value| match available.get_mut(value) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    })
}

/// Whether `values` is in non-increasing order
pub fn is_descending(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] >= w[1])
}

/// `count` strictly positive values in descending order, large enough that a
/// full walk of the include/omit tree never finishes in a test
pub fn wide_input(count: i64) -> Vec<i64> {
    (1..=count).rev().map(|v| v * 3).collect()
}
