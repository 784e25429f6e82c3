//! Scheduling algorithm identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::ScheduleError;

/// The five supported uniprocessor scheduling disciplines.
///
/// Serialized with the short identifiers used by the process table
/// (`RR`, `SPN`, `SRT`, `HRRN`, `Feedback`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Preemptive FIFO rotation with a fixed quantum.
    #[default]
    #[serde(rename = "RR")]
    RoundRobin,
    /// Non-preemptive, shortest burst first.
    #[serde(rename = "SPN")]
    ShortestProcessNext,
    /// Preemptive, shortest remaining work first.
    #[serde(rename = "SRT")]
    ShortestRemainingTime,
    /// Non-preemptive, highest (wait + service) / service first.
    #[serde(rename = "HRRN")]
    HighestResponseRatioNext,
    /// Multi-level feedback queues with demotion.
    #[serde(rename = "Feedback")]
    Feedback,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::RoundRobin,
        Algorithm::ShortestProcessNext,
        Algorithm::ShortestRemainingTime,
        Algorithm::HighestResponseRatioNext,
        Algorithm::Feedback,
    ];

    /// Short identifier (`RR`, `SPN`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::RoundRobin => "RR",
            Algorithm::ShortestProcessNext => "SPN",
            Algorithm::ShortestRemainingTime => "SRT",
            Algorithm::HighestResponseRatioNext => "HRRN",
            Algorithm::Feedback => "Feedback",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::RoundRobin => "RR, time quantum = 1",
            Algorithm::ShortestProcessNext => "SPN",
            Algorithm::ShortestRemainingTime => "SRT",
            Algorithm::HighestResponseRatioNext => "HRRN",
            Algorithm::Feedback => "Feedback, time quantum = 1",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::RoundRobin | Algorithm::ShortestRemainingTime | Algorithm::Feedback
        )
    }

    /// Parses an identifier, falling back to Round Robin for unknown input.
    pub fn from_id_or_default(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            warn!(algorithm = %id, "Unknown algorithm identifier, falling back to RR");
            Algorithm::RoundRobin
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| ScheduleError::UnknownAlgorithm(s.to_string()))
    }
}
