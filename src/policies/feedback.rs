//! Multi-level feedback queues.
//!
//! # Algorithm
//!
//! 1. New arrivals enter the level-0 (highest priority) queue in arrival order.
//! 2. The head of the highest non-empty queue runs for one quantum.
//! 3. Arrivals during the slice are admitted before the preempted process
//!    is re-queued.
//! 4. An unfinished process drops one level; at the lowest level it stays
//!    there and rotates Round Robin style. There is no promotion.
//!
//! If every queue is empty the clock jumps to the next arrival.

use std::collections::VecDeque;

use super::{admit, arrival_order, check_quantum, ProcessState};
use crate::models::{Job, ScheduleResult, TimeSlot};

/// Feedback run with the queue level each slot executed at.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRun {
    /// The schedule.
    pub result: ScheduleResult,
    /// `slot_levels[k]` is the level of `result.timeline[k]`.
    pub slot_levels: Vec<usize>,
}

/// Schedules jobs with multi-level feedback.
///
/// # Panics
/// If `quantum` is not finite and positive.
pub fn feedback(jobs: &[Job<'_>], quantum: f64, levels: usize) -> ScheduleResult {
    feedback_with_trace(jobs, quantum, levels).result
}

/// Like [`feedback`], also reporting the queue level of every slot.
///
/// `levels` is clamped to at least one queue.
///
/// # Panics
/// If `quantum` is not finite and positive.
pub fn feedback_with_trace(jobs: &[Job<'_>], quantum: f64, levels: usize) -> FeedbackRun {
    check_quantum(quantum);

    let lowest = levels.max(1) - 1;
    let pending = arrival_order(jobs);
    let mut queues: Vec<VecDeque<ProcessState>> = vec![VecDeque::new(); lowest + 1];
    let mut timeline = Vec::new();
    let mut slot_levels = Vec::new();
    let mut clock = 0.0;
    let mut next = 0;

    loop {
        next = admit(&pending, next, clock, &mut queues[0]);

        let Some(mut current) = queues.iter_mut().find_map(|q| q.pop_front()) else {
            if next < pending.len() {
                clock = pending[next].arrival;
                continue;
            }
            break;
        };

        let slice = quantum.min(current.remaining);
        timeline.push(TimeSlot::new(jobs[current.job].name, clock, clock + slice));
        slot_levels.push(current.level);
        clock += slice;
        current.remaining -= slice;

        next = admit(&pending, next, clock, &mut queues[0]);

        if current.remaining > 0.0 {
            current.level = (current.level + 1).min(lowest);
            queues[current.level].push_back(current);
        }
    }

    FeedbackRun {
        result: ScheduleResult::completed(timeline, clock),
        slot_levels,
    }
}
