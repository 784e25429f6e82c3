//! Input validation for simulation runs.
//!
//! Checks every process definition before scheduling. Detects:
//! - Missing arrival or processing times (incomplete table rows)
//! - Non-positive processing times
//! - Negative arrival times
//! - NaN or infinite values
//! - Times beyond [`MAX_TIME`], per process and for the whole run
//!
//! A single invalid process rejects the whole run. The policies rely on
//! `processing_time > 0` to terminate, and on every clock value staying in
//! the range where adding one unit is exact, so nothing reaches them
//! unchecked.

use crate::models::{Job, Process};

/// Largest accepted time value (2^52).
///
/// Bounds each arrival, each processing time, and the run horizon (latest
/// arrival plus total processing). Below 2^53, `t + 1.0 > t` and
/// `t - 1.0 < t` hold for every f64, so unit steps always make progress.
pub const MAX_TIME: f64 = 4_503_599_627_370_496.0;

/// Validation result: the scheduled view of the input, or every problem found.
pub type ValidationResult<'a> = Result<Vec<Job<'a>>, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Position of the offending process in the input list.
    pub index: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival time is not set.
    MissingArrivalTime,
    /// Processing time is not set.
    MissingProcessingTime,
    /// Processing time is zero or negative.
    NonPositiveProcessingTime,
    /// Arrival time is negative.
    NegativeArrivalTime,
    /// A time is NaN or infinite.
    NonFiniteValue,
    /// A time, or the run horizon, exceeds [`MAX_TIME`].
    TimeOutOfRange,
}

impl ValidationError {
    /// Creates an error not tied to a specific process.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            index: None,
            message: message.into(),
        }
    }

    fn at(index: usize, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            index: Some(index),
            message: message.into(),
        }
    }
}

/// Validates a process list and returns its scheduled view.
///
/// Checks, for each process:
/// 1. Arrival time is present, finite and non-negative
/// 2. Processing time is present, finite and strictly positive
/// 3. Both times are at most [`MAX_TIME`]
///
/// Then, for the list as a whole, the latest arrival plus the total
/// processing time must not exceed [`MAX_TIME`].
///
/// An empty list is valid and yields no jobs.
///
/// # Returns
/// `Ok(jobs)` in input order if all checks pass, `Err(errors)` with all
/// detected issues otherwise.
pub fn validate_processes(processes: &[Process]) -> ValidationResult<'_> {
    let mut errors = Vec::new();
    let mut jobs = Vec::with_capacity(processes.len());

    for (index, p) in processes.iter().enumerate() {
        let arrival = check_arrival(index, p, &mut errors);
        let service = check_processing(index, p, &mut errors);

        if let (Some(arrival), Some(service)) = (arrival, service) {
            jobs.push(Job {
                index,
                name: &p.name,
                arrival,
                service,
            });
        }
    }

    if errors.is_empty() {
        check_horizon(&jobs, &mut errors);
    }

    if errors.is_empty() {
        Ok(jobs)
    } else {
        Err(errors)
    }
}

/// Whether at least one process in the list is schedulable.
pub fn has_valid_process(processes: &[Process]) -> bool {
    processes.iter().any(Process::is_valid)
}

fn check_horizon(jobs: &[Job<'_>], errors: &mut Vec<ValidationError>) {
    let last_arrival = jobs.iter().map(|j| j.arrival).fold(0.0, f64::max);
    let work: f64 = jobs.iter().map(|j| j.service).sum();
    let horizon = last_arrival + work;
    if horizon > MAX_TIME {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOutOfRange,
            format!("Latest arrival plus total processing time is {horizon}, above {MAX_TIME}"),
        ));
    }
}

fn out_of_range(index: usize, p: &Process, what: &str, t: f64) -> ValidationError {
    ValidationError::at(
        index,
        ValidationErrorKind::TimeOutOfRange,
        format!("Process '{}' has {what} time {t}, above {MAX_TIME}", p.name),
    )
}

fn check_arrival(index: usize, p: &Process, errors: &mut Vec<ValidationError>) -> Option<f64> {
    match p.arrival_time {
        None => {
            errors.push(ValidationError::at(
                index,
                ValidationErrorKind::MissingArrivalTime,
                format!("Process '{}' has no arrival time", p.name),
            ));
            None
        }
        Some(t) if !t.is_finite() => {
            errors.push(ValidationError::at(
                index,
                ValidationErrorKind::NonFiniteValue,
                format!("Process '{}' has non-finite arrival time {t}", p.name),
            ));
            None
        }
        Some(t) if t < 0.0 => {
            errors.push(ValidationError::at(
                index,
                ValidationErrorKind::NegativeArrivalTime,
                format!("Process '{}' has negative arrival time {t}", p.name),
            ));
            None
        }
        Some(t) if t > MAX_TIME => {
            errors.push(out_of_range(index, p, "arrival", t));
            None
        }
        // -0.0 becomes 0.0 so it sorts level with other zero arrivals.
        Some(t) => Some(t + 0.0),
    }
}

fn check_processing(index: usize, p: &Process, errors: &mut Vec<ValidationError>) -> Option<f64> {
    match p.processing_time {
        None => {
            errors.push(ValidationError::at(
                index,
                ValidationErrorKind::MissingProcessingTime,
                format!("Process '{}' has no processing time", p.name),
            ));
            None
        }
        Some(t) if !t.is_finite() => {
            errors.push(ValidationError::at(
                index,
                ValidationErrorKind::NonFiniteValue,
                format!("Process '{}' has non-finite processing time {t}", p.name),
            ));
            None
        }
        Some(t) if t <= 0.0 => {
            errors.push(ValidationError::at(
                index,
                ValidationErrorKind::NonPositiveProcessingTime,
                format!("Process '{}' has processing time {t}", p.name),
            ));
            None
        }
        Some(t) if t > MAX_TIME => {
            errors.push(out_of_range(index, p, "processing", t));
            None
        }
        Some(t) => Some(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::with_times("A", 0.0, 3.0),
            Process::with_times("B", 1.0, 2.0),
            Process::with_times("C", 1.0, 0.5),
        ]
    }

    #[test]
    fn test_valid_input() {
        let processes = sample_processes();
        let jobs = validate_processes(&processes).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[1].index, 1);
        assert_eq!(jobs[1].name, "B");
        assert_eq!(jobs[1].arrival, 1.0);
        assert_eq!(jobs[1].service, 2.0);
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_processing_time() {
        let mut processes = sample_processes();
        processes.push(Process::new("D").with_arrival(0.0));

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingProcessingTime);
        assert_eq!(errors[0].index, Some(3));
    }

    #[test]
    fn test_missing_both_times_reports_both() {
        let processes = vec![Process::new("A")];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingArrivalTime));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingProcessingTime));
    }

    #[test]
    fn test_non_positive_processing_time() {
        let processes = vec![
            Process::with_times("A", 0.0, 0.0),
            Process::with_times("B", 0.0, -1.0),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveProcessingTime));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::with_times("A", -2.0, 1.0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrivalTime);
        assert!(errors[0].message.contains("'A'"));
    }

    #[test]
    fn test_non_finite_values() {
        let processes = vec![
            Process::with_times("A", f64::NAN, 1.0),
            Process::with_times("B", 0.0, f64::INFINITY),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonFiniteValue));
    }

    #[test]
    fn test_huge_times_out_of_range() {
        let processes = vec![
            Process::with_times("A", 1e17, 2.0),
            Process::with_times("B", 0.0, 1e17),
            Process::with_times("C", MAX_TIME, 1.0),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::TimeOutOfRange));
        assert_eq!(errors[0].index, Some(0));
        assert_eq!(errors[1].index, Some(1));
    }

    #[test]
    fn test_horizon_out_of_range() {
        // Each time is in range on its own, the run is not.
        let processes = vec![
            Process::with_times("A", MAX_TIME, 1.0),
            Process::with_times("B", 0.0, 2.0),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOutOfRange);
        assert_eq!(errors[0].index, None);

        let edge = vec![Process::with_times("A", MAX_TIME - 2.0, 2.0)];
        assert!(validate_processes(&edge).is_ok());
    }

    #[test]
    fn test_negative_zero_arrival_normalized() {
        let processes = vec![Process::with_times("A", -0.0, 1.0)];
        let jobs = validate_processes(&processes).unwrap();
        assert_eq!(jobs[0].arrival, 0.0);
        assert!(jobs[0].arrival.is_sign_positive());
    }

    #[test]
    fn test_has_valid_process() {
        assert!(!has_valid_process(&[]));
        assert!(!has_valid_process(&[Process::new("A")]));
        assert!(has_valid_process(&[
            Process::new("A"),
            Process::with_times("B", 0.0, 1.0)
        ]));
    }
}
