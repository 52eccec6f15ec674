//! Computed schedules for both calculation strategies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::phase::SchedulePhases;
use crate::project::{Complexity, ProjectType, TeamSize};
use crate::request::{ScheduleConstraints, WorkingDays};

/// Inputs and derived factors echoed back with a configurable schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationFactors {
    /// Project type
    pub project_type: ProjectType,

    /// Complexity
    pub complexity: Complexity,

    /// Team size
    pub team_size: TeamSize,

    /// Factor applied to every phase
    pub complexity_multiplier: f64,

    /// Factor applied to planning and editing
    pub team_efficiency: f64,

    /// Weekdays that were counted
    pub working_days: WorkingDays,

    /// Constraints as supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ScheduleConstraints>,

    /// Budget as supplied; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Target duration as supplied; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_duration: Option<u32>,
}

/// A business-day-aware three-phase schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// Sum of the phase durations (not the calendar span)
    pub total_days: u32,

    /// The three phases
    pub phases: SchedulePhases,

    /// Echo of the inputs
    pub calculation_factors: CalculationFactors,
}

impl ScheduleResult {
    /// First day of planning.
    pub fn start_date(&self) -> NaiveDate {
        self.phases.planning.start_date
    }

    /// Last day of editing.
    pub fn end_date(&self) -> NaiveDate {
        self.phases.editing.end_date
    }

    /// Calendar days from the first to the last day, inclusive.
    pub fn calendar_span(&self) -> i64 {
        (self.end_date() - self.start_date()).num_days() + 1
    }
}

/// A phase of the fixed 7/1/14 schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPhase {
    /// Display name
    pub name: String,

    /// First day
    pub start_date: NaiveDate,

    /// Last day, inclusive
    pub end_date: NaiveDate,

    /// Calendar days
    pub duration: u32,
}

/// The fixed flat-calendar-day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSchedule {
    /// Pre-production
    pub planning: FixedPhase,
    /// Camera day
    pub shooting: FixedPhase,
    /// Post-production
    pub editing: FixedPhase,
}

impl FixedSchedule {
    /// Phases in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &FixedPhase> {
        [&self.planning, &self.shooting, &self.editing].into_iter()
    }

    /// Sum of the phase durations.
    pub fn total_duration(&self) -> u32 {
        self.iter().map(|p| p.duration).sum()
    }
}

/// Either kind of computed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "schedule", rename_all = "camelCase")]
pub enum ComputedSchedule {
    /// Multiplier-based, business-day-aware
    Configurable(ScheduleResult),
    /// Flat 7/1/14 calendar days
    Fixed(FixedSchedule),
}

impl ComputedSchedule {
    /// First day of the schedule.
    pub fn start_date(&self) -> NaiveDate {
        match self {
            ComputedSchedule::Configurable(s) => s.start_date(),
            ComputedSchedule::Fixed(s) => s.planning.start_date,
        }
    }

    /// Last day of the schedule.
    pub fn end_date(&self) -> NaiveDate {
        match self {
            ComputedSchedule::Configurable(s) => s.end_date(),
            ComputedSchedule::Fixed(s) => s.editing.end_date,
        }
    }

    /// Total days as each strategy reports them.
    pub fn total_days(&self) -> u32 {
        match self {
            ComputedSchedule::Configurable(s) => s.total_days,
            ComputedSchedule::Fixed(s) => s.total_duration(),
        }
    }
}
