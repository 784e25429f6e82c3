//! Schedule quality metrics.
//!
//! Computes the classic per-process performance measures from a finished
//! timeline and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last slot |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - service |
//! | Response | first start - arrival |
//! | Normalized turnaround | turnaround / service |
//! | Utilization | busy time / total time |
//! | Throughput | completed processes / total time |
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Table 9.5

use serde::Serialize;

use crate::models::{Process, ScheduleResult};

/// Measures for one process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    pub name: String,
    pub arrival_time: f64,
    pub service_time: f64,
    pub completion_time: f64,
    pub turnaround_time: f64,
    pub waiting_time: f64,
    pub response_time: f64,
    /// Turnaround divided by service (1.0 = never waited).
    pub normalized_turnaround: f64,
}

/// Aggregate measures for a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    /// Per-process measures, in input order.
    pub processes: Vec<ProcessMetrics>,
    pub avg_turnaround_time: f64,
    pub avg_waiting_time: f64,
    pub avg_response_time: f64,
    pub avg_normalized_turnaround: f64,
    /// Fraction of `total_time` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from a result and the processes it was computed from.
    ///
    /// Processes without times, or without any slot in the timeline, are
    /// skipped. An empty or rejected result yields all-zero aggregates.
    pub fn calculate(result: &ScheduleResult, processes: &[Process]) -> Self {
        let per_process: Vec<ProcessMetrics> = processes
            .iter()
            .filter_map(|p| Self::process_metrics(result, p))
            .collect();

        let count = per_process.len();
        let avg = |f: fn(&ProcessMetrics) -> f64| -> f64 {
            if count == 0 {
                0.0
            } else {
                per_process.iter().map(f).sum::<f64>() / count as f64
            }
        };

        let avg_turnaround_time = avg(|m| m.turnaround_time);
        let avg_waiting_time = avg(|m| m.waiting_time);
        let avg_response_time = avg(|m| m.response_time);
        let avg_normalized_turnaround = avg(|m| m.normalized_turnaround);

        let (cpu_utilization, throughput) = if result.total_time > 0.0 {
            (
                result.busy_time() / result.total_time,
                count as f64 / result.total_time,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            processes: per_process,
            avg_turnaround_time,
            avg_waiting_time,
            avg_response_time,
            avg_normalized_turnaround,
            cpu_utilization,
            throughput,
            context_switches: result.context_switches(),
        }
    }

    /// Metrics for a named process.
    pub fn for_process(&self, name: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.name == name)
    }

    fn process_metrics(result: &ScheduleResult, p: &Process) -> Option<ProcessMetrics> {
        let arrival = p.arrival_time?;
        let service = p.processing_time?;
        let completion = result.completion_time(&p.name)?;
        let first_start = result.first_start_time(&p.name)?;

        let turnaround = completion - arrival;
        Some(ProcessMetrics {
            name: p.name.clone(),
            arrival_time: arrival,
            service_time: service,
            completion_time: completion,
            turnaround_time: turnaround,
            waiting_time: turnaround - service,
            response_time: first_start - arrival,
            normalized_turnaround: turnaround / service,
        })
    }
}
