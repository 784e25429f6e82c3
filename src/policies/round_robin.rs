//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival; clock starts at 0.
//! 2. Admit every arrived process to the tail of the ready queue.
//! 3. If the queue is empty, jump the clock to the next arrival.
//! 4. Run the head for `min(quantum, remaining)` and emit one slot.
//! 5. Admit processes that arrived during the slice, *then* re-enqueue the
//!    preempted process behind them.
//!
//! # Complexity
//! O(W / q + n log n) where W = total work, q = quantum.

use std::collections::VecDeque;

use super::{admit, arrival_order, check_quantum};
use crate::models::{Job, ScheduleResult, TimeSlot};

/// Schedules jobs with Round Robin and the given time quantum.
///
/// # Panics
/// If `quantum` is not finite and positive.
///
/// # Example
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::policies::round_robin;
/// use cpu_schedule::validation::validate_processes;
///
/// let processes = vec![Process::with_times("A", 0.0, 2.0), Process::with_times("B", 0.0, 1.0)];
/// let jobs = validate_processes(&processes).unwrap();
/// let result = round_robin(&jobs, 1.0);
/// assert_eq!(result.total_time, 3.0);
/// assert_eq!(result.timeline[1].process_name, "B");
/// ```
pub fn round_robin(jobs: &[Job<'_>], quantum: f64) -> ScheduleResult {
    check_quantum(quantum);

    let pending = arrival_order(jobs);
    let mut ready = VecDeque::with_capacity(pending.len());
    let mut timeline = Vec::new();
    let mut clock = 0.0;
    let mut next = 0;

    while !ready.is_empty() || next < pending.len() {
        next = admit(&pending, next, clock, &mut ready);

        let Some(mut current) = ready.pop_front() else {
            // Queue empty and nothing admitted, so `next` is in range.
            clock = pending[next].arrival;
            continue;
        };

        let slice = quantum.min(current.remaining);
        timeline.push(TimeSlot::new(jobs[current.job].name, clock, clock + slice));
        clock += slice;
        current.remaining -= slice;

        next = admit(&pending, next, clock, &mut ready);

        if current.remaining > 0.0 {
            ready.push_back(current);
        }
    }

    ScheduleResult::completed(timeline, clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::test_support::*;

    #[test]
    fn test_rr_two_processes() {
        let processes = program(&[("A", 0.0, 3.0), ("B", 1.0, 2.0)]);
        let result = round_robin(&jobs(&processes), 1.0);

        assert_eq!(
            slots(&result),
            vec![
                ("A", 0.0, 1.0),
                ("B", 1.0, 2.0),
                ("A", 2.0, 3.0),
                ("B", 3.0, 4.0),
                ("A", 4.0, 5.0),
            ]
        );
        assert_eq!(result.total_time, 5.0);
        assert!(!result.has_error);
    }

    #[test]
    fn test_rr_new_arrival_goes_before_preempted() {
        // At t=1, B arrives and must be queued ahead of A's re-entry,
        // even though C is already waiting.
        let processes = program(&[("A", 0.0, 2.0), ("C", 0.0, 1.0), ("B", 1.0, 1.0)]);
        let result = round_robin(&jobs(&processes), 1.0);

        assert_eq!(
            slots(&result),
            vec![("A", 0.0, 1.0), ("C", 1.0, 2.0), ("B", 2.0, 3.0), ("A", 3.0, 4.0)]
        );
    }

    #[test]
    fn test_rr_idle_gap_before_first_arrival() {
        let processes = program(&[("A", 3.0, 2.0)]);
        let result = round_robin(&jobs(&processes), 1.0);

        assert_eq!(slots(&result), vec![("A", 3.0, 4.0), ("A", 4.0, 5.0)]);
        assert_eq!(result.total_time, 5.0);
    }

    #[test]
    fn test_rr_idle_gap_between_processes() {
        let processes = program(&[("A", 0.0, 1.0), ("B", 4.0, 1.0)]);
        let result = round_robin(&jobs(&processes), 1.0);

        assert_eq!(slots(&result), vec![("A", 0.0, 1.0), ("B", 4.0, 5.0)]);
        assert_eq!(result.total_time, 5.0);
        assert_eq!(result.idle_time(), 3.0);
    }

    #[test]
    fn test_rr_fractional_burst() {
        let processes = program(&[("A", 0.0, 1.5)]);
        let result = round_robin(&jobs(&processes), 1.0);

        assert_eq!(slots(&result), vec![("A", 0.0, 1.0), ("A", 1.0, 1.5)]);
        assert_eq!(result.total_time, 1.5);
    }

    #[test]
    fn test_rr_larger_quantum() {
        let processes = program(&[("A", 0.0, 3.0), ("B", 0.0, 2.0)]);
        let result = round_robin(&jobs(&processes), 2.0);

        assert_eq!(
            slots(&result),
            vec![("A", 0.0, 2.0), ("B", 2.0, 4.0), ("A", 4.0, 5.0)]
        );
    }

    #[test]
    fn test_rr_equal_arrivals_keep_input_order() {
        let processes = program(&[("B", 0.0, 1.0), ("A", 0.0, 1.0)]);
        let result = round_robin(&jobs(&processes), 1.0);
        assert_eq!(slots(&result), vec![("B", 0.0, 1.0), ("A", 1.0, 2.0)]);
        assert_well_formed(&result);
    }

    #[test]
    fn test_rr_no_jobs() {
        let result = round_robin(&[], 1.0);
        assert!(result.is_empty());
        assert_eq!(result.total_time, 0.0);
    }
}
