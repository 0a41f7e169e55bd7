//! Closest match from below.
//!
//! Useful when the payment amount itself may shrink slightly (for example a
//! "send max" that absorbs the fee). Accepts sums in
//! `target - max_shortfall..=target` and keeps the highest one seen.

use super::{BestCandidate, StrategyBase};
use crate::branch_and_bound::action::{EvaluationResult, NextAction};
use crate::branch_and_bound::strategy::SearchStrategy;

/// Finds the largest sum in `target - max_shortfall..=target`
#[derive(Debug, Clone)]
pub struct LessSelectionStrategy {
    base: StrategyBase,
    max_shortfall: i64,
    best: BestCandidate,
}

impl LessSelectionStrategy {
    /// `values` must be the engine's candidate values
    pub fn new(values: &[i64], target: i64, max_shortfall: i64) -> Self {
        Self {
            base: StrategyBase::new(values, target),
            max_shortfall: max_shortfall.max(0),
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

impl SearchStrategy for LessSelectionStrategy {
    // The engine's fast rejection compares the total against this, so it has
    // to be the lowest acceptable sum rather than the nominal target.
    fn target(&self) -> i64 {
        self.base.target() - self.max_shortfall
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

        if sum > target {
            return EvaluationResult::SkipBranch;
        }

        if sum >= target - self.max_shortfall && self.best.sum().map_or(true, |best| sum > best) {
            self.best.record(selection, sum);
        }

        if sum == target {
            return EvaluationResult::Match;
        }

        // Nothing below can beat the recorded candidate
        let reachable = sum + self.base.remaining(depth);
        let floor = self.best.sum().unwrap_or(target - self.max_shortfall - 1);
        if reachable <= floor {
            return EvaluationResult::SkipBranch;
        }

        EvaluationResult::Continue
    }
}
