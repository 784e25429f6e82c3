//! Uniprocessor scheduling policies.
//!
//! Each policy is an independent, stateless function from validated jobs
//! to a [`ScheduleResult`](crate::models::ScheduleResult). All scratch state
//! (ready queues, remaining-time counters) is allocated per call.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|------------|-----------|
//! | Round Robin | yes | FIFO rotation, fixed quantum |
//! | SPN | no | shortest burst |
//! | SRT | yes | shortest remaining work |
//! | HRRN | no | highest (wait + service) / service |
//! | Feedback | yes | highest non-empty queue, demotion per quantum |
//!
//! # Tie-breaking
//! SPN, SRT and HRRN scan jobs in input order and only replace the current
//! candidate on a strict improvement, so the earliest job wins ties.
//! Round Robin and Feedback order arrivals with a stable sort.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod feedback;
mod hrrn;
mod round_robin;
mod spn;
mod srt;

pub use feedback::{feedback, feedback_with_trace, FeedbackRun};
pub use hrrn::{highest_response_ratio_next, response_ratio};
pub use round_robin::round_robin;
pub use spn::shortest_process_next;
pub use srt::shortest_remaining_time;

use std::collections::VecDeque;

use crate::models::Job;

/// Per-run mutable state of one process.
#[derive(Debug, Clone, Copy)]
struct ProcessState {
    /// Position in the job slice.
    job: usize,
    arrival: f64,
    remaining: f64,
    /// Feedback queue level (0 = highest priority).
    level: usize,
}

/// Fresh runtime states sorted by arrival (stable for equal arrivals).
fn arrival_order(jobs: &[Job<'_>]) -> Vec<ProcessState> {
    let mut states: Vec<ProcessState> = jobs
        .iter()
        .enumerate()
        .map(|(job, j)| ProcessState {
            job,
            arrival: j.arrival,
            remaining: j.service,
            level: 0,
        })
        .collect();
    states.sort_by(|a, b| a.arrival.total_cmp(&b.arrival));
    states
}

/// Moves every pending state with `arrival <= clock` to the tail of `queue`.
///
/// Returns the index of the first state that has not arrived yet.
fn admit(
    pending: &[ProcessState],
    mut next: usize,
    clock: f64,
    queue: &mut VecDeque<ProcessState>,
) -> usize {
    while next < pending.len() && pending[next].arrival <= clock {
        queue.push_back(pending[next]);
        next += 1;
    }
    next
}

/// Clock after idling in whole time units until `earliest` has arrived.
///
/// Equivalent to repeatedly advancing the clock by one until
/// `earliest <= clock`.
fn idle_until(clock: f64, earliest: f64) -> f64 {
    if earliest <= clock {
        clock
    } else {
        clock + (earliest - clock).ceil()
    }
}

/// Asserts a quantum can make progress.
fn check_quantum(quantum: f64) {
    assert!(
        quantum.is_finite() && quantum > 0.0,
        "quantum must be finite and positive, got {quantum}"
    );
}
