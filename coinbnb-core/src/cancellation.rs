//! Cooperative cancellation for long running searches
//!
//! A [`CancellationToken`] is a cheap-to-clone handle: every clone observes
//! the same flag, so one thread can hand a clone to a search and cancel it
//! from elsewhere. A token may also carry a deadline, after which it reports
//! itself as cancelled without anyone calling [`CancellationToken::cancel`].
//!
//! The search engine does not poll the token on every step. It checks it
//! once every `cancellation_check_interval` iterations
//! (see [`SearchConfig`](crate::config::SearchConfig)).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation signal with an optional deadline
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Create a token that is cancelled only by an explicit [`cancel`](Self::cancel)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that additionally cancels itself once `timeout` has elapsed
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Request cancellation. All clones of this token observe the request.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested or the deadline has passed
    pub fn is_cancelled(&self) -> bool {
        if self.flag.load(Ordering::Relaxed) {
            return true;
        }

        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    /// The deadline of this token, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
