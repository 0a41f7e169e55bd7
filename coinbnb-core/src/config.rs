//! Search configuration for coinbnb.
//!
//! Settings are stored in TOML format. Every field has a default, so an
//! empty file (or a file that only sets a few keys) is a valid configuration.
//!
//! ```toml
//! cancellation_check_interval = 10000
//! seed = 42
//! timeout_ms = 500
//!
//! [logging]
//! level = "Debug"
//! json_format = true
//! ```

use crate::error::{config_error, BnbResult};
use crate::logging::LogConfig;
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Number of iterations between two cancellation checks
pub const DEFAULT_CANCELLATION_CHECK_INTERVAL: u64 = 10_000;

/// Tuning knobs for a [`BranchAndBound`](crate::branch_and_bound::BranchAndBound) engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Iterations between cancellation polls; must be greater than 0
    #[serde(default = "default_check_interval")]
    pub cancellation_check_interval: u64,

    /// Seed for the branch-order coin flips. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Wall-clock budget for `search_with_budget`, in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub logging: LogConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cancellation_check_interval: default_check_interval(),
            seed: None,
            timeout_ms: None,
            logging: LogConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> BnbResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> BnbResult<Self> {
        let config: SearchConfig =
            toml::from_str(content).map_err(|e| anyhow!("Failed to parse config file: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> BnbResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> BnbResult<()> {
        if self.cancellation_check_interval == 0 {
            return Err(config_error(
                "Invalid cancellation check interval: must be greater than 0",
            ));
        }

        if self.timeout_ms == Some(0) {
            return Err(config_error("Invalid timeout: must be greater than 0"));
        }

        Ok(())
    }

    /// The configured wall-clock budget, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Ensure a configuration file exists at the specified path
/// If it doesn't exist, create it with default values
pub fn ensure_config_exists(path: &Path) -> BnbResult<()> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        SearchConfig::default().save(path)?;
    }

    Ok(())
}

fn default_check_interval() -> u64 {
    DEFAULT_CANCELLATION_CHECK_INTERVAL
}
