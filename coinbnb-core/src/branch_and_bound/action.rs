//! Per-depth decision state of the iterative search
//!
//! A recursive include/omit search keeps "what to try next" implicitly on the
//! call stack. The engine keeps it explicitly instead: one [`NextAction`] per
//! depth, advanced by [`NextAction::next_step`] each time that depth is
//! visited.

use rand::Rng;

/// What the engine tries next at a given depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NextAction {
    /// Include the value, then try omitting it
    IncludeFirstThenOmit,
    /// Omit the value, then try including it
    OmitFirstThenInclude,
    /// Include the value (the omit branch was already explored)
    Include,
    /// Omit the value (the include branch was already explored)
    Omit,
    /// Both branches are exhausted; retreat to the parent depth
    Backtrack,
}

impl NextAction {
    /// Draw the branch order for a freshly opened depth with an unbiased coin flip
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            NextAction::IncludeFirstThenOmit
        } else {
            NextAction::OmitFirstThenInclude
        }
    }

    /// The action to take the next time the same depth is visited.
    ///
    /// [`NextAction::Backtrack`] is terminal and maps to itself; the engine
    /// leaves the depth instead of advancing it.
    #[inline]
    pub fn next_step(self) -> Self {
        match self {
            NextAction::IncludeFirstThenOmit => NextAction::Omit,
            NextAction::OmitFirstThenInclude => NextAction::Include,
            NextAction::Include | NextAction::Omit | NextAction::Backtrack => NextAction::Backtrack,
        }
    }

    /// Whether this action puts the value into the selection
    #[inline]
    pub fn is_include(self) -> bool {
        matches!(self, NextAction::IncludeFirstThenOmit | NextAction::Include)
    }

    /// Whether this action leaves the value out of the selection
    #[inline]
    pub fn is_omit(self) -> bool {
        matches!(self, NextAction::OmitFirstThenInclude | NextAction::Omit)
    }
}

/// Verdict of a [`SearchStrategy`](super::SearchStrategy) on a partial selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationResult {
    /// Keep descending
    Continue,
    /// Prune: no completion of this partial selection is acceptable
    SkipBranch,
    /// The current selection is acceptable; stop the search
    Match,
}
