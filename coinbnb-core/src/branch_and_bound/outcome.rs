//! Search results and counters

use std::fmt;
use std::time::Duration;

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The strategy accepted a selection. Values are in descending order.
    Match(Vec<i64>),
    /// The whole tree was walked without a match
    Exhausted,
    /// The cancellation signal was observed at a checkpoint
    Cancelled,
    /// The sum of all values is below the target; no traversal was done
    Unreachable,
}

impl SearchOutcome {
    /// Whether a selection was found
    pub fn is_match(&self) -> bool {
        matches!(self, SearchOutcome::Match(_))
    }

    /// The selected values, if any
    pub fn selection(&self) -> Option<&[i64]> {
        match self {
            SearchOutcome::Match(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Consume the outcome, keeping only the selected values
    pub fn into_selection(self) -> Option<Vec<i64>> {
        match self {
            SearchOutcome::Match(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Match(values) => write!(f, "match ({} values)", values.len()),
            SearchOutcome::Exhausted => write!(f, "exhausted"),
            SearchOutcome::Cancelled => write!(f, "cancelled"),
            SearchOutcome::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Counters collected during a single search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Loop iterations, the same counter that throttles cancellation checks
    pub iterations: u64,
    /// Include decisions committed
    pub includes: u64,
    /// Omit decisions committed
    pub omits: u64,
    /// Branches pruned by the strategy
    pub prunes: u64,
    /// Depth levels abandoned after both branches were tried
    pub backtracks: u64,
    /// Deepest level opened
    pub max_depth: usize,
    /// Wall-clock time spent in the search
    pub elapsed: Duration,
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch-and-bound statistics:")?;
        writeln!(f, "  Iterations:  {}", self.iterations)?;
        writeln!(f, "  Includes:    {}", self.includes)?;
        writeln!(f, "  Omits:       {}", self.omits)?;
        writeln!(f, "  Prunes:      {}", self.prunes)?;
        writeln!(f, "  Backtracks:  {}", self.backtracks)?;
        writeln!(f, "  Max depth:   {}", self.max_depth)?;
        writeln!(f, "  Elapsed:     {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Outcome of a search together with its statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub statistics: SearchStatistics,
}
