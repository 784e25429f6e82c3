//! Highest Response Ratio Next (non-preemptive).
//!
//! Same decision-point structure as SPN, but the job with the strictly
//! greatest response ratio `(wait + service) / service` is dispatched.
//! Waiting only ever raises a job's ratio, so long jobs cannot starve.
//!
//! # Reference
//! Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use tracing::trace;

use super::idle_until;
use crate::models::{Job, ScheduleResult, TimeSlot};

/// Response ratio of a job at `clock`.
///
/// Always `>= 1` for an arrived job; exactly 1 when it has not waited.
#[inline]
pub fn response_ratio(job: &Job<'_>, clock: f64) -> f64 {
    let wait = clock - job.arrival;
    (wait + job.service) / job.service
}

/// Schedules jobs with Highest Response Ratio Next.
pub fn highest_response_ratio_next(jobs: &[Job<'_>]) -> ScheduleResult {
    let mut done = vec![false; jobs.len()];
    let mut finished = 0;
    let mut timeline = Vec::with_capacity(jobs.len());
    let mut clock = 0.0;

    while finished < jobs.len() {
        let mut selected: Option<(usize, f64)> = None;
        let mut earliest = f64::INFINITY;

        for (i, job) in jobs.iter().enumerate() {
            if done[i] {
                continue;
            }
            if job.arrival > clock {
                earliest = earliest.min(job.arrival);
                continue;
            }
            let ratio = response_ratio(job, clock);
            match selected {
                Some((_, best)) if ratio <= best => {}
                _ => selected = Some((i, ratio)),
            }
        }

        let Some((i, ratio)) = selected else {
            clock = idle_until(clock, earliest);
            continue;
        };

        let job = &jobs[i];
        trace!(process = job.name, index = job.index, clock, ratio, "HRRN dispatch");
        timeline.push(TimeSlot::new(job.name, clock, clock + job.service));
        clock += job.service;
        done[i] = true;
        finished += 1;
    }

    ScheduleResult::completed(timeline, clock)
}
