//! Timeline (Gantt chart) model.
//!
//! A timeline is the ordered sequence of CPU occupancy slots produced by
//! one simulation run. Together with the final clock value and the
//! validation flag it forms a [`ScheduleResult`].

use serde::{Deserialize, Serialize};

/// One contiguous interval during which a process holds the CPU.
///
/// Invariant: `start_time < end_time <= total_time` of the owning result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Name of the process running in this slot.
    pub process_name: String,
    /// Slot start (inclusive).
    pub start_time: f64,
    /// Slot end (exclusive).
    pub end_time: f64,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(process_name: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            process_name: process_name.into(),
            start_time,
            end_time,
        }
    }

    /// Slot width (end - start).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Outcome of one scheduling run.
///
/// `has_error` is set when the input contained at least one invalid
/// process; the timeline is then empty. An empty input is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// CPU occupancy slots in time order.
    pub timeline: Vec<TimeSlot>,
    /// Clock value when the simulation finished.
    pub total_time: f64,
    /// Whether the input was rejected.
    pub has_error: bool,
}

impl ScheduleResult {
    /// Nothing to schedule: empty timeline, no error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Input rejected by validation.
    pub fn rejected() -> Self {
        Self {
            timeline: Vec::new(),
            total_time: 0.0,
            has_error: true,
        }
    }

    /// A finished simulation.
    pub fn completed(timeline: Vec<TimeSlot>, total_time: f64) -> Self {
        Self {
            timeline,
            total_time,
            has_error: false,
        }
    }

    /// Whether the timeline has no slots.
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.timeline.len()
    }

    /// Total time the CPU was busy (sum of slot widths).
    pub fn busy_time(&self) -> f64 {
        self.timeline.iter().map(TimeSlot::duration).sum()
    }

    /// Total time the CPU was idle before `total_time`.
    pub fn idle_time(&self) -> f64 {
        (self.total_time - self.busy_time()).max(0.0)
    }

    /// All slots belonging to a process, in time order.
    pub fn slots_for_process(&self, process_name: &str) -> Vec<&TimeSlot> {
        self.timeline
            .iter()
            .filter(|s| s.process_name == process_name)
            .collect()
    }

    /// End of the last slot of a process.
    pub fn completion_time(&self, process_name: &str) -> Option<f64> {
        self.timeline
            .iter()
            .rev()
            .find(|s| s.process_name == process_name)
            .map(|s| s.end_time)
    }

    /// Start of the first slot of a process.
    pub fn first_start_time(&self, process_name: &str) -> Option<f64> {
        self.timeline
            .iter()
            .find(|s| s.process_name == process_name)
            .map(|s| s.start_time)
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.timeline
            .windows(2)
            .filter(|w| w[0].process_name != w[1].process_name)
            .count()
    }
}
