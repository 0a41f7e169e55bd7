//! coinbnb core library
//!
//! Branch-and-bound subset-sum search for transaction building: given the
//! amounts of spendable outputs, sorted descending, find a subset whose sum
//! satisfies a pluggable strategy (exact amount, closest above, closest below)
//! within a bounded time budget.
//!
//! # Modules
//!
//! - `branch_and_bound`: the search engine and strategies
//! - `cancellation`: cooperative cancellation tokens
//! - `config`: search configuration (TOML)
//! - `error`: error types
//! - `logging`: logger setup

/// Branch-and-bound engine and search strategies
pub mod branch_and_bound;

/// Cooperative cancellation
pub mod cancellation;

/// Configuration management
pub mod config;

/// Error types
pub mod error;

/// Logging setup
pub mod logging;

pub use branch_and_bound::{
    BranchAndBound, EvaluationResult, ExactMatchStrategy, LessSelectionStrategy,
    MoreSelectionStrategy, NextAction, SearchOutcome, SearchReport, SearchStatistics,
    SearchStrategy,
};
pub use cancellation::CancellationToken;
pub use config::SearchConfig;
pub use error::{BnbError, BnbResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use std::sync::Once;

static INIT: Once = Once::new();

/// Library initialization
///
/// Installs the default logger. Safe to call any number of times; only the
/// first call has an effect.
pub fn init() -> Result<(), String> {
    let mut result = Ok(());
    INIT.call_once(|| {
        result = logging::init(&logging::LogConfig::default())
            .map_err(|e| format!("Failed to initialize logging: {}", e));
    });
    result
}
