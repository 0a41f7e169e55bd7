//! Concrete search strategies
//!
//! Each strategy implements [`SearchStrategy`](super::SearchStrategy) and
//! differs only in which selections it accepts:
//!
//! - [`ExactMatchStrategy`] - the sum must equal the target
//! - [`MoreSelectionStrategy`] - closest sum at or above the target
//! - [`LessSelectionStrategy`] - closest sum at or below the target
//!
//! All of them share the include/omit bookkeeping in [`StrategyBase`].

use super::action::NextAction;

pub mod exact_match;
pub mod less_selection;
pub mod more_selection;

pub use exact_match::ExactMatchStrategy;
pub use less_selection::LessSelectionStrategy;
pub use more_selection::MoreSelectionStrategy;

/// Candidate values, target, and suffix sums shared by all strategies
#[derive(Debug, Clone)]
pub struct StrategyBase {
    values: Vec<i64>,
    /// `remaining[i]` is the sum of `values[i..]`; one extra trailing zero
    remaining: Vec<i64>,
    target: i64,
}

impl StrategyBase {
    /// `values` must be the same list (and order) the engine was built with
    pub fn new(values: &[i64], target: i64) -> Self {
        let mut remaining = vec![0i64; values.len() + 1];
        for i in (0..values.len()).rev() {
            remaining[i] = remaining[i + 1] + values[i];
        }

        Self {
            values: values.to_vec(),
            remaining,
            target,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Sum of the values from `depth` to the end; `0` past the last value
    #[inline]
    pub fn remaining(&self, depth: usize) -> i64 {
        self.remaining[depth.min(self.values.len())]
    }

    /// Standard sum update: includes add the value, everything else removes
    /// whatever `depth` currently contributes
    #[inline]
    pub fn update_sum(
        &self,
        action: NextAction,
        selection: &mut [i64],
        depth: usize,
        sum: i64,
    ) -> i64 {
        if action.is_include() {
            selection[depth] = self.values[depth];
            sum + self.values[depth]
        } else {
            let new_sum = sum - selection[depth];
            selection[depth] = 0;
            new_sum
        }
    }
}

/// Best candidate seen so far by a closest-match strategy
///
/// The slot buffer is allocated once, so recording a better candidate in
/// the middle of a search does not allocate.
#[derive(Debug, Clone)]
pub(crate) struct BestCandidate {
    slots: Vec<i64>,
    sum: Option<i64>,
}

impl BestCandidate {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            slots: vec![0; len],
            sum: None,
        }
    }

    pub(crate) fn sum(&self) -> Option<i64> {
        self.sum
    }

    pub(crate) fn record(&mut self, selection: &[i64], sum: i64) {
        self.slots.copy_from_slice(selection);
        self.sum = Some(sum);
    }

    /// Included values in descending order
    pub(crate) fn values(&self) -> Option<Vec<i64>> {
        self.sum?;
        Some(self.slots.iter().copied().filter(|slot| *slot > 0).collect())
    }

    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = 0);
        self.sum = None;
    }
}
