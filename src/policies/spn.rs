//! Shortest Process Next (non-preemptive).
//!
//! At every decision point, the arrived, unfinished job with the strictly
//! smallest burst runs to completion in a single slot. When nothing has
//! arrived the clock idles forward in whole units.
//!
//! # Reference
//! Smith (1956), shortest-first minimizes mean flow time on one machine.

use tracing::trace;

use super::idle_until;
use crate::models::{Job, ScheduleResult, TimeSlot};

/// Schedules jobs with Shortest Process Next.
pub fn shortest_process_next(jobs: &[Job<'_>]) -> ScheduleResult {
    let mut done = vec![false; jobs.len()];
    let mut finished = 0;
    let mut timeline = Vec::with_capacity(jobs.len());
    let mut clock = 0.0;

    while finished < jobs.len() {
        let mut selected: Option<usize> = None;
        let mut earliest = f64::INFINITY;

        for (i, job) in jobs.iter().enumerate() {
            if done[i] {
                continue;
            }
            if job.arrival > clock {
                earliest = earliest.min(job.arrival);
                continue;
            }
            match selected {
                Some(s) if job.service >= jobs[s].service => {}
                _ => selected = Some(i),
            }
        }

        let Some(i) = selected else {
            clock = idle_until(clock, earliest);
            continue;
        };

        let job = &jobs[i];
        trace!(process = job.name, index = job.index, clock, burst = job.service, "SPN dispatch");
        timeline.push(TimeSlot::new(job.name, clock, clock + job.service));
        clock += job.service;
        done[i] = true;
        finished += 1;
    }

    ScheduleResult::completed(timeline, clock)
}
