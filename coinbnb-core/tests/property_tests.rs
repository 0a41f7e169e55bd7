//! Property-based tests for the branch-and-bound engine
//!
//! These tests use quickcheck to generate candidate value lists and targets
//! and check the engine's guarantees on them.

mod common;

use coinbnb_core::branch_and_bound::{BranchAndBound, ExactMatchStrategy};
use coinbnb_core::SearchOutcome;
use common::{is_descending, is_sub_multiset, CountingStrategy};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

// Small enough that an exhaustive walk stays fast
const MAX_VALUES: usize = 14;

/// Valid engine input: 1..=MAX_VALUES strictly positive values, descending
#[derive(Clone, Debug)]
struct SortedValues(Vec<i64>);

impl Arbitrary for SortedValues {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % MAX_VALUES + 1;
        let mut values: Vec<i64> = (0..len)
            .map(|_| i64::from(u16::arbitrary(g) % 1_000) + 1)
            .collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        SortedValues(values)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Dropping any one value keeps the list sorted
        let values = self.0.clone();
        if values.len() <= 1 {
            return Box::new(std::iter::empty());
        }

        Box::new((0..values.len()).map(move |skip| {
            let mut smaller = values.clone();
            smaller.remove(skip);
            SortedValues(smaller)
        }))
    }
}

/// Target built from a known subset of the input
fn subset_target(values: &[i64], mask: &[bool]) -> i64 {
    let picked: i64 = values
        .iter()
        .zip(mask.iter().chain(std::iter::repeat(&false)))
        .filter(|(_, take)| **take)
        .map(|(v, _)| *v)
        .sum();

    if picked == 0 {
        values[0]
    } else {
        picked
    }
}

#[quickcheck]
fn known_subset_sum_is_always_found(values: SortedValues, mask: Vec<bool>) -> bool {
    let target = subset_target(&values.0, &mask);
    let engine = BranchAndBound::new(values.0).unwrap();
    let mut strategy = ExactMatchStrategy::new(engine.values(), target);

    match engine.try_find_match(&mut strategy, None) {
        Some(selected) => {
            selected.iter().sum::<i64>() == target
                && is_sub_multiset(&selected, engine.values())
                && is_descending(&selected)
        }
        None => false,
    }
}

#[quickcheck]
fn target_above_total_does_no_work(values: SortedValues, excess: u16) -> bool {
    let engine = BranchAndBound::new(values.0).unwrap();
    let target = engine.total() + i64::from(excess) + 1;
    let mut strategy = CountingStrategy::new(engine.values(), target);

    let report = engine.search(&mut strategy, None);

    report.outcome == SearchOutcome::Unreachable
        && strategy.update_calls.get() == 0
        && strategy.evaluate_calls == 0
}

#[quickcheck]
fn verdict_is_stable_across_calls(values: SortedValues, target: u16) -> TestResult {
    let target = i64::from(target % 5_000) + 1;
    let engine = BranchAndBound::new(values.0).unwrap();

    if engine.total() < target {
        return TestResult::discard();
    }

    let first = {
        let mut strategy = ExactMatchStrategy::new(engine.values(), target);
        engine.try_find_match(&mut strategy, None).is_some()
    };
    let second = {
        let mut strategy = ExactMatchStrategy::new(engine.values(), target);
        engine.try_find_match(&mut strategy, None).is_some()
    };

    TestResult::from_bool(first == second)
}

#[quickcheck]
fn unsorted_input_is_rejected(values: SortedValues) -> TestResult {
    let mut values = values.0;
    if values.first() == values.last() {
        return TestResult::discard();
    }

    values.reverse();
    TestResult::from_bool(BranchAndBound::new(values).is_err())
}
