//! Engine configuration.
//!
//! The defaults reproduce the classic textbook setup: Round Robin and
//! Feedback with a quantum of one time unit, and three feedback queues.
//! Values can be loaded from a TOML file; missing keys keep their defaults.
//!
//! ```toml
//! rr_quantum = 1.0
//! feedback_quantum = 1.0
//! feedback_levels = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Tunable parameters of the preemptive policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Round Robin time slice.
    pub rr_quantum: f64,
    /// Feedback time slice, identical at every level.
    pub feedback_quantum: f64,
    /// Number of feedback queues (level 0 = highest priority).
    pub feedback_levels: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rr_quantum: 1.0,
            feedback_quantum: 1.0,
            feedback_levels: 3,
        }
    }
}

impl EngineConfig {
    /// Sets the Round Robin quantum.
    pub fn with_rr_quantum(mut self, quantum: f64) -> Self {
        self.rr_quantum = quantum;
        self
    }

    /// Sets the Feedback quantum.
    pub fn with_feedback_quantum(mut self, quantum: f64) -> Self {
        self.feedback_quantum = quantum;
        self
    }

    /// Sets the number of Feedback levels.
    pub fn with_feedback_levels(mut self, levels: usize) -> Self {
        self.feedback_levels = levels;
        self
    }

    /// Checks that every quantum is positive and at least one level exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_quantum("rr_quantum", self.rr_quantum)?;
        check_quantum("feedback_quantum", self.feedback_quantum)?;
        if self.feedback_levels == 0 {
            return Err(ConfigError::InvalidLevels(self.feedback_levels));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "Loaded engine config");
        Ok(config)
    }
}

fn check_quantum(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidQuantum { field, value })
    }
}
