//! Uniprocessor CPU-scheduling simulator.
//!
//! Simulates classic scheduling disciplines over a user-defined set of
//! synthetic processes and produces a time-ordered execution trace (a Gantt
//! timeline) ready for visualization.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Job`, `TimeSlot`, `ScheduleResult`, `Algorithm`
//! - **`validation`**: Input checks (missing times, non-positive bursts)
//! - **`policies`**: The five scheduling policies as pure functions
//! - **`scheduler`**: Validation + dispatch engine and schedule metrics
//! - **`session`**: Editable process table and chart state
//! - **`render`**: Bar geometry, palette colors, text Gantt chart
//! - **`workload`**: Seeded random process sets
//! - **`config`**: Quantum and feedback-level settings
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::{Algorithm, Process};
//! use cpu_schedule::scheduler::Scheduler;
//!
//! let processes = vec![
//!     Process::with_times("A", 0.0, 3.0),
//!     Process::with_times("B", 1.0, 2.0),
//! ];
//! let result = Scheduler::new().schedule(&processes, Algorithm::RoundRobin);
//! assert_eq!(result.total_time, 5.0);
//! assert!(!result.has_error);
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod config;
pub mod error;
pub mod models;
pub mod policies;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod validation;
pub mod workload;

pub use error::{ConfigError, ScheduleError};
