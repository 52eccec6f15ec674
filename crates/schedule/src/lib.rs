//! Production schedule calculation.
//!
//! Two distinct algorithms lay out the planning, shooting and editing phases
//! of a video production:
//!
//! - [`ScheduleCalculator`]: base durations per project type, scaled by
//!   complexity and team size, stepped over working days only.
//! - [`fixed_schedule`]: a flat 7/1/14 calendar-day plan.
//!
//! [`ScheduleStrategy`] selects between them explicitly.

#![warn(missing_docs)]

pub mod calculator;
pub mod calendar;
pub mod days;
pub mod factors;
pub mod fixed;
pub mod outline;
pub mod strategy;
pub mod table;

pub use calculator::{PhaseDays, ScheduleCalculator};
pub use calendar::calendar_entries;
pub use days::{advance_working_days, ScheduleError};
pub use fixed::{fixed_schedule, FixedPhaseSpec, FIXED_PHASES, FIXED_TOTAL_DURATION};
pub use outline::PhaseOutline;
pub use strategy::ScheduleStrategy;
pub use table::{DurationRange, DurationTable, PhaseDurations, TableError};
