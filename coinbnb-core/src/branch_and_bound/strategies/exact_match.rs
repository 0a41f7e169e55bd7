//! Exact match: the selection must sum to the target, no more, no less.

use super::StrategyBase;
use crate::branch_and_bound::action::{EvaluationResult, NextAction};
use crate::branch_and_bound::strategy::SearchStrategy;

/// Accepts the first selection whose sum equals the target
#[derive(Debug, Clone)]
pub struct ExactMatchStrategy {
    base: StrategyBase,
}

impl ExactMatchStrategy {
    /// `values` must be the engine's candidate values
    pub fn new(values: &[i64], target: i64) -> Self {
        Self {
            base: StrategyBase::new(values, target),
        }
    }
}

impl SearchStrategy for ExactMatchStrategy {
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

    fn evaluate(&mut self, _selection: &[i64], depth: usize, sum: i64) -> EvaluationResult {
        let target = self.base.target();

        if sum > target {
            return EvaluationResult::SkipBranch;
        }

        if sum == target {
            return EvaluationResult::Match;
        }

        // Everything left would still fall short
        if sum + self.base.remaining(depth) < target {
            return EvaluationResult::SkipBranch;
        }

        EvaluationResult::Continue
    }
}
