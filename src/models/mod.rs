//! Simulation domain models.
//!
//! Provides the value types shared by every scheduling policy: the
//! user-facing process definition, its validated view, and the timeline
//! a run produces.
//!
//! # Mapping to the Gantt chart
//!
//! | Type | Chart element |
//! |------|---------------|
//! | Process | Row label |
//! | TimeSlot | Colored bar |
//! | ScheduleResult | Whole chart + time axis |

mod algorithm;
mod process;
mod timeline;

pub use algorithm::Algorithm;
pub use process::{Job, Process};
pub use timeline::{ScheduleResult, TimeSlot};
