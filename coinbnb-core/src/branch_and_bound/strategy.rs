//! Pluggable pruning and acceptance policy
//!
//! The engine only knows how to walk the include/omit tree. Everything that
//! decides *what* counts as a solution lives behind [`SearchStrategy`].

use super::action::{EvaluationResult, NextAction};

/// Policy that drives a [`BranchAndBound`](super::BranchAndBound) search
///
/// The `selection` slice passed to both methods has one slot per candidate
/// value. A slot holds the value when it is included and `0` otherwise; the
/// strategy owns that bookkeeping through [`update_sum`](Self::update_sum).
pub trait SearchStrategy {
    /// The value the selection sum has to satisfy
    fn target(&self) -> i64;

    /// Record `action` at `depth` in `selection` and return the new running sum.
    ///
    /// Called for includes, omits and for [`NextAction::Backtrack`], which must
    /// undo the contribution of `depth`. Must depend only on its arguments and
    /// the candidate values, never on earlier calls.
    fn update_sum(
        &self,
        action: NextAction,
        selection: &mut [i64],
        depth: usize,
        sum: i64,
    ) -> i64;

    /// Classify the partial selection after a value was newly included.
    ///
    /// `depth` is the number of decisions made so far (index of the included
    /// value plus one). Strategies may record candidates here.
    fn evaluate(&mut self, selection: &[i64], depth: usize, sum: i64) -> EvaluationResult;
}
