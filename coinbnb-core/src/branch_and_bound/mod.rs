//! Branch-and-bound subset-sum search
//!
//! This module finds a subset of candidate values (typically the amounts of
//! spendable outputs) whose sum satisfies a pluggable acceptance rule.
//!
//! # Module Structure
//!
//! - `engine.rs` - the iterative search engine ([`BranchAndBound`])
//! - `action.rs` - per-depth state machine ([`NextAction`]) and strategy verdicts
//! - `strategy.rs` - the [`SearchStrategy`] trait
//! - `outcome.rs` - [`SearchOutcome`], [`SearchReport`], [`SearchStatistics`]
//! - `strategies/` - exact and closest-match strategies
//!
//! # Typical Usage
//!
//! ```
//! use coinbnb_core::branch_and_bound::{BranchAndBound, ExactMatchStrategy};
//!
//! let engine = BranchAndBound::new(vec![50, 30, 20, 10]).unwrap();
//! let mut strategy = ExactMatchStrategy::new(engine.values(), 60);
//!
//! let selected = engine.try_find_match(&mut strategy, None).unwrap();
//! assert_eq!(selected.iter().sum::<i64>(), 60);
//! ```
//!
//! The engine does not guarantee the best possible selection, only the
//! first one its (randomized) traversal order finds acceptable.

pub mod action;
pub mod engine;
pub mod outcome;
pub mod strategies;
pub mod strategy;

pub use action::{EvaluationResult, NextAction};
pub use engine::BranchAndBound;
pub use outcome::{SearchOutcome, SearchReport, SearchStatistics};
pub use strategies::{
    ExactMatchStrategy, LessSelectionStrategy, MoreSelectionStrategy, StrategyBase,
};
pub use strategy::SearchStrategy;
