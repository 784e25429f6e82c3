//! Scheduling engine and schedule metrics.
//!
//! # Engine
//!
//! `Scheduler` validates a process snapshot and dispatches it to one of the
//! five policies. It holds no per-run state, so repeated runs over the same
//! snapshot produce identical timelines.
//!
//! # Metrics
//!
//! `ScheduleMetrics` computes turnaround, waiting and response times plus
//! CPU utilization and throughput for a finished run.

mod engine;
mod metrics;

pub use engine::{run_schedule, Scheduler};
pub use metrics::{ProcessMetrics, ScheduleMetrics};
