//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors from the fallible scheduling API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// At least one process failed validation; nothing was scheduled.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// An algorithm identifier that is not one of RR, SPN, SRT, HRRN, Feedback.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Errors from loading or validating an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number greater than zero, got {value}")]
    InvalidQuantum { field: &'static str, value: f64 },

    #[error("feedback_levels must be at least 1, got {0}")]
    InvalidLevels(usize),

    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse config: {0}")]
    Parse(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
