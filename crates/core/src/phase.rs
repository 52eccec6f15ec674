//! Phase model - the three contiguous stages of a production schedule.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stage of a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    /// Pre-production
    Planning,
    /// Camera days
    Shooting,
    /// Post-production
    Editing,
}

impl PhaseKind {
    /// Phases in schedule order.
    pub const ALL: [PhaseKind; 3] = [PhaseKind::Planning, PhaseKind::Shooting, PhaseKind::Editing];

    /// Wire name of this phase.
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::Planning => "planning",
            PhaseKind::Shooting => "shooting",
            PhaseKind::Editing => "editing",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A computed phase of a business-day-aware schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseResult {
    /// Which phase
    pub phase: PhaseKind,

    /// Working days in the phase
    pub duration: u32,

    /// First calendar day
    pub start_date: NaiveDate,

    /// Last counted working day
    pub end_date: NaiveDate,

    /// Summary of the phase
    pub description: String,

    /// Typical tasks, in order
    pub tasks: Vec<String>,
}

/// The three phases of a schedule, keyed by name on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePhases {
    /// Pre-production
    pub planning: PhaseResult,
    /// Camera days
    pub shooting: PhaseResult,
    /// Post-production
    pub editing: PhaseResult,
}

impl SchedulePhases {
    /// Phases in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &PhaseResult> {
        [&self.planning, &self.shooting, &self.editing].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        let names: Vec<_> = PhaseKind::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["planning", "shooting", "editing"]);
    }

    #[test]
    fn test_phase_result_wire_shape() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let phase = PhaseResult {
            phase: PhaseKind::Shooting,
            duration: 2,
            start_date: date,
            end_date: date,
            description: "camera".into(),
            tasks: vec!["rehearsal".into()],
        };
        let json = serde_json::to_value(&phase).unwrap();
        assert_eq!(json["phase"], "shooting");
        assert_eq!(json["startDate"], "2025-01-06");
        assert_eq!(json["endDate"], "2025-01-06");
        assert_eq!(json["tasks"][0], "rehearsal");
    }
}
