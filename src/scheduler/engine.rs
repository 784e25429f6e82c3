//! Validation and dispatch.
//!
//! # Algorithm
//!
//! 1. Empty input → empty result, no error.
//! 2. Validate every process; any failure rejects the whole run.
//! 3. Dispatch on [`Algorithm`] to one policy and return its result.
//!
//! The caller's process list is only read; policies work on a borrowed,
//! validated view and their own scratch state.

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::{ConfigError, ScheduleError};
use crate::models::{Algorithm, Job, Process, ScheduleResult};
use crate::policies;
use crate::validation::validate_processes;

/// The scheduling engine.
///
/// Stateless apart from its configuration; one instance can serve any
/// number of runs, from any number of threads.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::{Algorithm, Process};
/// use cpu_schedule::scheduler::Scheduler;
///
/// let processes = vec![
///     Process::with_times("A", 0.0, 5.0),
///     Process::with_times("B", 1.0, 2.0),
///     Process::with_times("C", 2.0, 1.0),
/// ];
/// let result = Scheduler::new().schedule(&processes, Algorithm::ShortestProcessNext);
/// assert_eq!(result.total_time, 8.0);
/// assert_eq!(result.timeline[1].process_name, "C");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: EngineConfig,
}

impl Scheduler {
    /// Creates a scheduler with the default configuration (quantum 1, three feedback levels).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with a validated configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs one simulation.
    ///
    /// Never fails: invalid input is reported through `has_error`.
    pub fn schedule(&self, processes: &[Process], algorithm: Algorithm) -> ScheduleResult {
        match self.try_schedule(processes, algorithm) {
            Ok(result) => result,
            Err(_) => ScheduleResult::rejected(),
        }
    }

    /// Runs one simulation for a textual identifier.
    ///
    /// Unknown identifiers fall back to Round Robin.
    pub fn schedule_by_id(&self, processes: &[Process], algorithm_id: &str) -> ScheduleResult {
        self.schedule(processes, Algorithm::from_id_or_default(algorithm_id))
    }

    /// Runs one simulation, returning validation failures as an error.
    pub fn try_schedule(
        &self,
        processes: &[Process],
        algorithm: Algorithm,
    ) -> Result<ScheduleResult, ScheduleError> {
        if processes.is_empty() {
            debug!(%algorithm, "No processes to schedule");
            return Ok(ScheduleResult::empty());
        }

        let jobs = validate_processes(processes).map_err(|errors| {
            warn!(
                %algorithm,
                invalid = errors.len(),
                "Rejecting run with invalid processes"
            );
            ScheduleError::InvalidInput(errors)
        })?;

        let result = self.dispatch(&jobs, algorithm);
        debug!(
            %algorithm,
            processes = jobs.len(),
            slots = result.slot_count(),
            total_time = result.total_time,
            "Schedule computed"
        );
        Ok(result)
    }

    /// Runs every algorithm on the same input, in menu order.
    pub fn schedule_all(&self, processes: &[Process]) -> Vec<(Algorithm, ScheduleResult)> {
        Algorithm::ALL
            .into_iter()
            .map(|a| (a, self.schedule(processes, a)))
            .collect()
    }

    fn dispatch(&self, jobs: &[Job<'_>], algorithm: Algorithm) -> ScheduleResult {
        match algorithm {
            Algorithm::RoundRobin => policies::round_robin(jobs, self.config.rr_quantum),
            Algorithm::ShortestProcessNext => policies::shortest_process_next(jobs),
            Algorithm::ShortestRemainingTime => policies::shortest_remaining_time(jobs),
            Algorithm::HighestResponseRatioNext => policies::highest_response_ratio_next(jobs),
            Algorithm::Feedback => policies::feedback(
                jobs,
                self.config.feedback_quantum,
                self.config.feedback_levels,
            ),
        }
    }
}

/// Runs one simulation with the default configuration.
pub fn run_schedule(processes: &[Process], algorithm: Algorithm) -> ScheduleResult {
    Scheduler::new().schedule(processes, algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::test_support::{assert_well_formed, program, slots};
    use crate::validation::ValidationErrorKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::workload::{generate, WorkloadSpec};

    fn sample_program() -> Vec<Process> {
        program(&[("A", 0.0, 5.0), ("B", 1.0, 2.0), ("C", 2.0, 1.0)])
    }

    #[test]
    fn test_empty_input() {
        let scheduler = Scheduler::new();
        for alg in Algorithm::ALL {
            let result = scheduler.schedule(&[], alg);
            assert_eq!(result, ScheduleResult::empty());
            assert!(!result.has_error);
        }
    }

    #[test]
    fn test_one_invalid_process_rejects_run() {
        let mut processes = sample_program();
        processes.push(Process::new("D").with_arrival(0.0));

        for alg in Algorithm::ALL {
            let result = Scheduler::new().schedule(&processes, alg);
            assert!(result.has_error);
            assert!(result.timeline.is_empty());
            assert_eq!(result.total_time, 0.0);
        }
    }

    #[test]
    fn test_all_invalid_is_error() {
        let processes = vec![Process::new("A"), Process::new("B").with_arrival(0.0)];
        let result = run_schedule(&processes, Algorithm::RoundRobin);
        assert!(result.has_error);
        assert!(result.is_empty());
    }

    #[test]
    fn test_try_schedule_reports_errors() {
        let processes = vec![Process::with_times("A", 0.0, 0.0), Process::with_times("B", 0.0, 1.0)];
        let err = Scheduler::new()
            .try_schedule(&processes, Algorithm::Feedback)
            .unwrap_err();
        match err {
            ScheduleError::InvalidInput(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveProcessingTime);
                assert_eq!(errors[0].index, Some(0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_range_times_rejected() {
        let cases = [
            vec![Process::with_times("A", 1e17, 2.0)],
            vec![Process::with_times("A", 0.0, 1e17)],
        ];
        for processes in &cases {
            for alg in Algorithm::ALL {
                let result = Scheduler::new().schedule(processes, alg);
                assert!(result.has_error, "{alg}");
                assert!(result.timeline.is_empty(), "{alg}");
                assert_eq!(result.total_time, 0.0, "{alg}");
            }
        }
    }

    #[test]
    fn test_large_in_range_times_keep_slots_wide() {
        let processes = program(&[("A", 1e15, 2.0), ("B", 1e15, 1.0)]);
        for (alg, result) in Scheduler::new().schedule_all(&processes) {
            assert!(!result.has_error, "{alg}");
            assert_well_formed(&result);
            assert_eq!(result.busy_time(), 3.0, "{alg}");
        }
    }

    #[test]
    fn test_negative_zero_arrival_keeps_input_order() {
        let processes = vec![
            Process::with_times("A", 0.0, 2.0),
            Process::with_times("B", -0.0, 2.0),
        ];
        for alg in [Algorithm::RoundRobin, Algorithm::Feedback] {
            let result = Scheduler::new().schedule(&processes, alg);
            assert_eq!(result.timeline[0].process_name, "A", "{alg}");
            assert!(result.timeline[0].start_time.is_sign_positive(), "{alg}");
        }
    }

    #[test]
    fn test_dispatch_matches_policy() {
        let processes = sample_program();
        let s = Scheduler::new();

        assert_eq!(
            slots(&s.schedule(&processes, Algorithm::ShortestProcessNext)),
            vec![("A", 0.0, 5.0), ("C", 5.0, 6.0), ("B", 6.0, 8.0)]
        );
        assert_eq!(
            slots(&s.schedule(&processes, Algorithm::ShortestRemainingTime)),
            vec![("A", 0.0, 1.0), ("B", 1.0, 3.0), ("C", 3.0, 4.0), ("A", 4.0, 8.0)]
        );
        assert_eq!(s.schedule(&processes, Algorithm::RoundRobin).slot_count(), 8);
        assert_eq!(s.schedule(&processes, Algorithm::Feedback).slot_count(), 8);
    }

    #[test]
    fn test_unknown_id_falls_back_to_round_robin() {
        let processes = sample_program();
        let s = Scheduler::new();
        assert_eq!(
            s.schedule_by_id(&processes, "LOTTERY"),
            s.schedule(&processes, Algorithm::RoundRobin)
        );
        assert_eq!(
            s.schedule_by_id(&processes, "HRRN"),
            s.schedule(&processes, Algorithm::HighestResponseRatioNext)
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let processes = sample_program();
        let before = processes.clone();
        for (_, result) in Scheduler::new().schedule_all(&processes) {
            assert!(!result.has_error);
        }
        assert_eq!(processes, before);
    }

    #[test]
    fn test_with_config_rejects_bad_quantum() {
        let config = EngineConfig::default().with_rr_quantum(-1.0);
        assert!(Scheduler::with_config(config).is_err());
    }

    #[test]
    fn test_config_quantum_applied() {
        let config = EngineConfig::default().with_rr_quantum(2.0);
        let s = Scheduler::with_config(config).unwrap();
        let processes = program(&[("A", 0.0, 3.0), ("B", 0.0, 2.0)]);
        assert_eq!(
            slots(&s.schedule(&processes, Algorithm::RoundRobin)),
            vec![("A", 0.0, 2.0), ("B", 2.0, 4.0), ("A", 4.0, 5.0)]
        );
    }

    #[test]
    fn test_random_workloads_conserve_work() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = WorkloadSpec::new(6).with_max_arrival(10).with_max_burst(6);
        let scheduler = Scheduler::new();

        for _ in 0..50 {
            let processes = generate(&spec, &mut rng);
            let work: f64 = processes.iter().filter_map(|p| p.processing_time).sum();
            let last_arrival = processes
                .iter()
                .filter_map(|p| p.arrival_time)
                .fold(0.0, f64::max);

            for (alg, result) in scheduler.schedule_all(&processes) {
                assert!(!result.has_error, "{alg}");
                assert_well_formed(&result);
                assert_eq!(result.busy_time(), work, "{alg}");
                assert!(result.total_time >= last_arrival, "{alg}");
                assert!(result.total_time >= work, "{alg}");
                for p in &processes {
                    let busy: f64 = result
                        .slots_for_process(&p.name)
                        .iter()
                        .map(|s| s.duration())
                        .sum();
                    assert_eq!(Some(busy), p.processing_time, "{alg} {}", p.name);
                }
            }
        }
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(42);
        let processes = generate(&WorkloadSpec::new(8), &mut rng);
        let s = Scheduler::new();
        for alg in Algorithm::ALL {
            assert_eq!(s.schedule(&processes, alg), s.schedule(&processes, alg));
        }
    }

    #[test]
    fn test_no_idle_when_all_arrive_at_zero() {
        let processes = program(&[("A", 0.0, 3.0), ("B", 0.0, 1.0), ("C", 0.0, 2.0)]);
        for (alg, result) in Scheduler::new().schedule_all(&processes) {
            assert_eq!(result.total_time, 6.0, "{alg}");
            assert_eq!(result.idle_time(), 0.0, "{alg}");
        }
    }
}
