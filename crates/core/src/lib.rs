//! VRidge core data models.
//!
//! This crate defines the requests, schedules and calendar entries shared by
//! the schedule calculator, storage and the HTTP surface.

#![warn(missing_docs)]

mod error;

// Project metadata and phases
mod project;
mod phase;

// Requests and results
mod request;
mod schedule;
mod calendar;

pub mod validate;

pub use error::{UnknownVariant, ValidationError, ValidationErrors};

pub use project::{Complexity, ProjectType, TeamSize};
pub use phase::{PhaseKind, PhaseResult, SchedulePhases};

pub use request::{ScheduleConstraints, ScheduleRequest, WorkingDays};
pub use schedule::{CalculationFactors, ComputedSchedule, FixedPhase, FixedSchedule, ScheduleResult};
pub use calendar::CalendarEntry;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
