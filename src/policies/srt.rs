//! Shortest Remaining Time (preemptive).
//!
//! Simulated one time unit at a time. Each tick runs the arrived job with
//! the strictly smallest remaining work; consecutive ticks of the same job
//! are coalesced into one slot, and any switch (or idle tick) closes it.

use super::idle_until;
use crate::models::{Job, ScheduleResult, TimeSlot};

/// Width of one simulation tick.
const TICK: f64 = 1.0;

/// Schedules jobs with Shortest Remaining Time.
pub fn shortest_remaining_time(jobs: &[Job<'_>]) -> ScheduleResult {
    let mut remaining: Vec<f64> = jobs.iter().map(|j| j.service).collect();
    let mut unfinished = jobs.len();
    let mut timeline = Vec::new();
    let mut clock = 0.0;
    // (job, slot start) of the slot currently being extended.
    let mut open: Option<(usize, f64)> = None;

    while unfinished > 0 {
        let mut selected: Option<usize> = None;
        let mut earliest = f64::INFINITY;

        for (i, job) in jobs.iter().enumerate() {
            if remaining[i] <= 0.0 {
                continue;
            }
            if job.arrival > clock {
                earliest = earliest.min(job.arrival);
                continue;
            }
            match selected {
                Some(s) if remaining[i] >= remaining[s] => {}
                _ => selected = Some(i),
            }
        }

        let Some(i) = selected else {
            close_slot(&mut timeline, jobs, open.take(), clock);
            clock = idle_until(clock, earliest);
            continue;
        };

        if open.map(|(j, _)| j) != Some(i) {
            close_slot(&mut timeline, jobs, open.take(), clock);
            open = Some((i, clock));
        }

        let step = TICK.min(remaining[i]);
        remaining[i] -= step;
        clock += step;
        if remaining[i] <= 0.0 {
            unfinished -= 1;
        }
    }

    close_slot(&mut timeline, jobs, open, clock);
    ScheduleResult::completed(timeline, clock)
}

fn close_slot(timeline: &mut Vec<TimeSlot>, jobs: &[Job<'_>], open: Option<(usize, f64)>, end: f64) {
    if let Some((job, start)) = open {
        if end > start {
            timeline.push(TimeSlot::new(jobs[job].name, start, end));
        }
    }
}
