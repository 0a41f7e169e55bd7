//! Error handling for coinbnb
//!
//! Construction of a [`BranchAndBound`](crate::branch_and_bound::BranchAndBound)
//! engine is the only place where the search core can fail. All of these
//! failures are permanent usage errors and are reported synchronously.
//! Searching never produces an error: "no match" and "cancelled" are
//! ordinary outcomes, see [`SearchOutcome`](crate::branch_and_bound::SearchOutcome).
//!
//! # Usage
//!
//! ```
//! use coinbnb_core::branch_and_bound::BranchAndBound;
//! use coinbnb_core::error::BnbError;
//!
//! match BranchAndBound::new(vec![3, 5, 1]) {
//!     Err(BnbError::NotSortedDescending { index }) => assert_eq!(index, 1),
//!     other => panic!("unexpected result: {:?}", other.map(|_| ())),
//! }
//! ```

use std::error::Error as StdError;
use thiserror::Error;

/// The error type for the coinbnb search core
#[derive(Debug, Error)]
pub enum BnbError {
    /// The candidate value list was empty
    #[error("Input error: value list is empty")]
    EmptyInput,

    /// A candidate value was zero or negative
    #[error("Input error: only strictly positive values are supported (value {value} at index {index})")]
    NonPositiveValue { index: usize, value: i64 },

    /// The candidate values were not sorted in descending order
    #[error("Input error: values must be sorted in descending order (violated at index {index})")]
    NotSortedDescending { index: usize },

    /// Configuration errors
    #[error("Configuration error: {context}")]
    Config {
        context: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

/// Result type alias using [`BnbError`]
pub type BnbResult<T> = Result<T, BnbError>;

impl BnbError {
    /// Whether this error was caused by an invalid candidate value list
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            BnbError::EmptyInput
                | BnbError::NonPositiveValue { .. }
                | BnbError::NotSortedDescending { .. }
        )
    }
}

/// Create a new configuration error with context
pub fn config_error<S: Into<String>>(context: S) -> BnbError {
    BnbError::Config {
        context: context.into(),
        source: None,
    }
}

impl From<anyhow::Error> for BnbError {
    fn from(err: anyhow::Error) -> Self {
        BnbError::Config {
            context: format!("{:#}", err),
            source: Some(err.into()),
        }
    }
}
