//! Iterative branch-and-bound search over descending candidate values
//!
//! The engine walks the binary include/omit tree depth first. Instead of
//! recursing it keeps one [`NextAction`] per depth in a flat array and moves
//! a depth cursor up and down that array:
//!
//! - include: record the value, ask the strategy to evaluate, then descend
//!   unless the branch was pruned or matched
//! - omit: record the omission and descend without evaluating
//! - backtrack: undo the depth's contribution and retreat to the parent
//!
//! The branch order of every newly opened depth is an independent coin flip,
//! so repeated searches do not systematically prefer the largest values.

use crate::cancellation::CancellationToken;
use crate::config::SearchConfig;
use crate::error::{BnbError, BnbResult};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use super::action::{EvaluationResult, NextAction};
use super::outcome::{SearchOutcome, SearchReport, SearchStatistics};
use super::strategy::SearchStrategy;

/// Subset-sum search engine over a fixed list of candidate values
///
/// The value list is validated once at construction and is read-only
/// afterwards, so a single engine can serve any number of searches, also
/// from several threads at once. Each search allocates its own selection and
/// action arrays up front and nothing else while traversing.
#[derive(Debug, Clone)]
pub struct BranchAndBound {
    /// Candidate values, strictly positive, in descending order
    sorted_values: Box<[i64]>,
    /// Sum of all candidate values
    total: i64,
    config: SearchConfig,
}

impl BranchAndBound {
    /// Create an engine with the default [`SearchConfig`]
    ///
    /// # Errors
    /// Fails when `values` is empty, contains a value `<= 0`, or is not
    /// sorted in descending order.
    pub fn new(values: Vec<i64>) -> BnbResult<Self> {
        Self::with_config(values, SearchConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(values: Vec<i64>, config: SearchConfig) -> BnbResult<Self> {
        validate_values(&values)?;
        config.validate()?;

        let total: i64 = values.iter().sum();

        Ok(Self {
            sorted_values: values.into_boxed_slice(),
            total,
            config,
        })
    }

    /// The candidate values in descending order
    pub fn values(&self) -> &[i64] {
        &self.sorted_values
    }

    /// Number of candidate values
    pub fn len(&self) -> usize {
        self.sorted_values.len()
    }

    /// Always `false`: construction rejects empty input
    pub fn is_empty(&self) -> bool {
        self.sorted_values.is_empty()
    }

    /// Sum of all candidate values
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Settings applied to every search run by this engine
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Look for a selection the strategy accepts.
    ///
    /// Returns the selected values in descending order, or `None` when the
    /// search space was exhausted, the target is unreachable, or the search
    /// was cancelled. Use [`search`](Self::search) to tell these apart.
    pub fn try_find_match<S>(
        &self,
        strategy: &mut S,
        cancellation: Option<&CancellationToken>,
    ) -> Option<Vec<i64>>
    where
        S: SearchStrategy + ?Sized,
    {
        self.search(strategy, cancellation).outcome.into_selection()
    }

    /// Run a search, drawing branch orders from the configured seed or from
    /// an OS-seeded generator
    pub fn search<S>(
        &self,
        strategy: &mut S,
        cancellation: Option<&CancellationToken>,
    ) -> SearchReport
    where
        S: SearchStrategy + ?Sized,
    {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        self.search_with_rng(strategy, cancellation, &mut rng)
    }

    /// Run a search bounded by the configured `timeout_ms`, if any
    pub fn search_with_budget<S>(&self, strategy: &mut S) -> SearchReport
    where
        S: SearchStrategy + ?Sized,
    {
        match self.config.timeout() {
            Some(timeout) => {
                let token = CancellationToken::with_timeout(timeout);
                self.search(strategy, Some(&token))
            }
            None => self.search(strategy, None),
        }
    }

    /// Run a search with a caller-provided source of branch-order coin flips
    pub fn search_with_rng<S, R>(
        &self,
        strategy: &mut S,
        cancellation: Option<&CancellationToken>,
        rng: &mut R,
    ) -> SearchReport
    where
        S: SearchStrategy + ?Sized,
        R: Rng + ?Sized,
    {
        let started = Instant::now();
        let target = strategy.target();

        if self.total < target {
            debug!(
                "Target {} exceeds total {} of {} values, skipping search",
                target,
                self.total,
                self.len()
            );
            return SearchReport {
                outcome: SearchOutcome::Unreachable,
                statistics: SearchStatistics::default(),
            };
        }

        debug!("Searching {} values for target {}", self.len(), target);

        let mut statistics = SearchStatistics::default();
        let outcome = self.traverse(strategy, cancellation, rng, &mut statistics);
        statistics.elapsed = started.elapsed();

        debug!(
            "Search for target {} finished: {} after {} iterations",
            target, outcome, statistics.iterations
        );

        SearchReport {
            outcome,
            statistics,
        }
    }

    fn traverse<S, R>(
        &self,
        strategy: &mut S,
        cancellation: Option<&CancellationToken>,
        rng: &mut R,
        statistics: &mut SearchStatistics,
    ) -> SearchOutcome
    where
        S: SearchStrategy + ?Sized,
        R: Rng + ?Sized,
    {
        let count = self.sorted_values.len();
        let check_interval = self.config.cancellation_check_interval;

        let mut selection = vec![0i64; count];
        let mut actions = vec![NextAction::Backtrack; count];
        let mut sum = 0i64;
        let mut depth = 0usize;
        let mut iteration = 0u64;

        actions[0] = NextAction::random(rng);

        let outcome = loop {
            iteration += 1;

            // Only every `check_interval` iterations
            if let Some(token) = cancellation {
                if iteration % check_interval == 0 && token.is_cancelled() {
                    trace!("Cancellation observed at iteration {}", iteration);
                    break SearchOutcome::Cancelled;
                }
            }

            let action = actions[depth];

            match action {
                NextAction::IncludeFirstThenOmit | NextAction::Include => {
                    actions[depth] = action.next_step();
                    sum = strategy.update_sum(action, &mut selection, depth, sum);
                    statistics.includes += 1;

                    match strategy.evaluate(&selection, depth + 1, sum) {
                        EvaluationResult::SkipBranch => {
                            statistics.prunes += 1;
                            continue;
                        }
                        EvaluationResult::Match => {
                            break SearchOutcome::Match(self.selected_values(&selection));
                        }
                        EvaluationResult::Continue => {}
                    }
                }
                NextAction::OmitFirstThenInclude | NextAction::Omit => {
                    actions[depth] = action.next_step();
                    sum = strategy.update_sum(action, &mut selection, depth, sum);
                    statistics.omits += 1;
                }
                NextAction::Backtrack => {
                    sum = strategy.update_sum(action, &mut selection, depth, sum);
                    statistics.backtracks += 1;

                    if depth == 0 {
                        break SearchOutcome::Exhausted;
                    }
                    depth -= 1;
                    continue;
                }
            }

            // Leaf: retry the sibling at this depth
            if depth + 1 == count {
                continue;
            }

            depth += 1;
            actions[depth] = NextAction::random(rng);
            statistics.max_depth = statistics.max_depth.max(depth);
        };

        statistics.iterations = iteration;
        outcome
    }

    /// Included values in input order, which is descending
    fn selected_values(&self, selection: &[i64]) -> Vec<i64> {
        selection
            .iter()
            .zip(self.sorted_values.iter())
            .filter(|(slot, _)| **slot > 0)
            .map(|(_, value)| *value)
            .collect()
    }
}

/// Check the construction contract: non-empty, strictly positive, descending
fn validate_values(values: &[i64]) -> BnbResult<()> {
    if values.is_empty() {
        return Err(BnbError::EmptyInput);
    }

    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v <= 0) {
        return Err(BnbError::NonPositiveValue { index, value });
    }

    if let Some(index) = values.windows(2).position(|w| w[0] < w[1]) {
        return Err(BnbError::NotSortedDescending { index: index + 1 });
    }

    Ok(())
}
