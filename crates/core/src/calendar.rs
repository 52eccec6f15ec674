//! Calendar entries written when a project is created with a schedule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::phase::PhaseKind;

/// An all-day span on the project calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    /// Owning project
    pub project_id: String,

    /// Phase this entry covers
    pub phase: PhaseKind,

    /// Display title
    pub title: String,

    /// First day
    pub start_date: NaiveDate,

    /// Last day, inclusive
    pub end_date: NaiveDate,

    /// Always true for phase entries
    pub all_day: bool,
}
