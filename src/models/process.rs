//! Process (workload) model.
//!
//! A process is a synthetic unit of CPU work: it becomes eligible at its
//! arrival time and needs a fixed amount of processor time (its burst).
//!
//! # Time Representation
//! Times are abstract, dimensionless clock units starting at t=0.
//! Fractional values are accepted; the policies consume at most one
//! quantum per dispatch, so a fractional burst yields a short final slice.

use serde::{Deserialize, Serialize};

use crate::validation::MAX_TIME;

/// A process definition as entered by the user.
///
/// Both times are optional because a row in the process table may be
/// incomplete. Incomplete rows are rejected by validation before any
/// scheduling happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Process identifier (conventionally a single uppercase letter).
    pub name: String,
    /// Clock value at which the process becomes eligible to run.
    pub arrival_time: Option<f64>,
    /// Total CPU time the process needs to complete.
    pub processing_time: Option<f64>,
}

impl Process {
    /// Creates a process with no times set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arrival_time: None,
            processing_time: None,
        }
    }

    /// Creates a fully specified process.
    pub fn with_times(name: impl Into<String>, arrival: f64, processing: f64) -> Self {
        Self {
            name: name.into(),
            arrival_time: Some(arrival),
            processing_time: Some(processing),
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: f64) -> Self {
        self.arrival_time = Some(arrival);
        self
    }

    /// Sets the processing time.
    pub fn with_processing(mut self, processing: f64) -> Self {
        self.processing_time = Some(processing);
        self
    }

    /// Whether this process can be scheduled.
    ///
    /// Requires both times, a strictly positive burst and a non-negative
    /// arrival, each at most [`MAX_TIME`]. The run horizon is only checked
    /// by [`validate_processes`](crate::validation::validate_processes).
    pub fn is_valid(&self) -> bool {
        match (self.arrival_time, self.processing_time) {
            (Some(arrival), Some(processing)) => {
                (0.0..=MAX_TIME).contains(&arrival) && processing > 0.0 && processing <= MAX_TIME
            }
            _ => false,
        }
    }
}

/// A validated process, borrowed from the caller's list.
///
/// Policies only ever see jobs, so every burst is known to be finite
/// and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Job<'a> {
    /// Position in the caller's process list.
    pub index: usize,
    /// Process name.
    pub name: &'a str,
    /// Arrival time.
    pub arrival: f64,
    /// Required CPU time.
    pub service: f64,
}
