//! Closest match from above.
//!
//! Useful when paying a little more than the target is acceptable (the excess
//! goes to fees instead of a change output). The strategy stops the search on
//! an exact hit; otherwise the engine exhausts (or is cancelled) and the caller
//! reads the best candidate recorded on the way.

use super::{BestCandidate, StrategyBase};
use crate::branch_and_bound::action::{EvaluationResult, NextAction};
use crate::branch_and_bound::strategy::SearchStrategy;

/// Finds the smallest sum in `target..=target + max_excess`
#[derive(Debug, Clone)]
pub struct MoreSelectionStrategy {
    base: StrategyBase,
    max_excess: i64,
    best: BestCandidate,
}

impl MoreSelectionStrategy {
    /// `values` must be the engine's candidate values
    pub fn new(values: &[i64], target: i64, max_excess: i64) -> Self {
        Self {
            base: StrategyBase::new(values, target),
            max_excess: max_excess.max(0),
            best: BestCandidate::new(values.len()),
        }
    }

    /// Best selection found so far, values in descending order
    pub fn best_selection(&self) -> Option<Vec<i64>> {
        self.best.values()
    }

    /// Sum of [`best_selection`](Self::best_selection)
    pub fn best_sum(&self) -> Option<i64> {
        self.best.sum()
    }

    /// Forget the recorded candidate so the strategy can be reused
    pub fn reset(&mut self) {
        self.best.clear();
    }
}

impl SearchStrategy for MoreSelectionStrategy {
    fn target(&self) -> i64 {
        self.base.target()
    }

    fn update_sum(
        &self,
        action: NextAction,
        selection: &mut [i64],
        depth: usize,
        sum: i64,
    ) -> i64 {
        self.base.update_sum(action, selection, depth, sum)
    }

    fn evaluate(&mut self, selection: &[i64], depth: usize, sum: i64) -> EvaluationResult {
        let target = self.base.target();

        if sum >= target {
            let improves = self.best.sum().map_or(true, |best| sum < best);
            if sum - target <= self.max_excess && improves {
                self.best.record(selection, sum);
            }

            if sum == target {
                return EvaluationResult::Match;
            }

            // Including more can only move further away
            return EvaluationResult::SkipBranch;
        }

        if sum + self.base.remaining(depth) < target {
            return EvaluationResult::SkipBranch;
        }

        EvaluationResult::Continue
    }
}
