//! Schedule request - project metadata plus optional caller constraints.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrors};
use crate::phase::PhaseKind;
use crate::project::{Complexity, ProjectType, TeamSize};

/// Set of weekdays counted as working days (0 = Sunday .. 6 = Saturday).
///
/// Never empty: an empty set would leave no day to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WorkingDays(u8);

impl WorkingDays {
    /// Monday through Friday.
    pub const WEEKDAYS: WorkingDays = WorkingDays(0b0011_1110);

    /// Every day of the week.
    pub const ALL: WorkingDays = WorkingDays(0b0111_1111);

    /// Build a set from weekday numbers. Duplicates are ignored.
    pub fn new(days: impl IntoIterator<Item = u8>) -> Result<Self, ValidationError> {
        let mut mask = 0u8;
        for day in days {
            if day > 6 {
                return Err(ValidationError::new(
                    "constraints.availableWeekdays",
                    format!("weekday must be between 0 (Sunday) and 6 (Saturday), got {day}"),
                ));
            }
            mask |= 1 << day;
        }
        if mask == 0 {
            return Err(ValidationError::new(
                "constraints.availableWeekdays",
                "at least one working weekday is required",
            ));
        }
        Ok(Self(mask))
    }

    /// Whether `date` falls on a working day.
    pub fn contains(self, date: NaiveDate) -> bool {
        self.contains_day(date.weekday().num_days_from_sunday() as u8)
    }

    /// Whether weekday number `day` is a working day.
    pub fn contains_day(self, day: u8) -> bool {
        day <= 6 && self.0 & (1 << day) != 0
    }

    /// Weekday numbers in ascending order.
    pub fn days(self) -> Vec<u8> {
        (0..=6).filter(|d| self.contains_day(*d)).collect()
    }
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self::WEEKDAYS
    }
}

impl TryFrom<Vec<u8>> for WorkingDays {
    type Error = ValidationError;

    fn try_from(days: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<WorkingDays> for Vec<u8> {
    fn from(days: WorkingDays) -> Self {
        days.days()
    }
}

impl fmt::Display for WorkingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<String> = self.days().iter().map(u8::to_string).collect();
        f.write_str(&days.join(","))
    }
}

/// Caller-supplied limits applied on top of the duration table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConstraints {
    /// Hard cap on planning days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_planning_days: Option<u32>,

    /// Hard cap on shooting days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_shooting_days: Option<u32>,

    /// Hard cap on editing days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_editing_days: Option<u32>,

    /// Weekdays counted as working days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_weekdays: Option<WorkingDays>,
}

impl ScheduleConstraints {
    /// The cap for one phase, if any.
    pub fn cap_for(&self, phase: PhaseKind) -> Option<u32> {
        match phase {
            PhaseKind::Planning => self.max_planning_days,
            PhaseKind::Shooting => self.max_shooting_days,
            PhaseKind::Editing => self.max_editing_days,
        }
    }

    /// Working days, falling back to Monday-Friday.
    pub fn working_days(&self) -> WorkingDays {
        self.available_weekdays.unwrap_or_default()
    }

    /// Reject zero caps.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, cap) in [
            ("constraints.maxPlanningDays", self.max_planning_days),
            ("constraints.maxShootingDays", self.max_shooting_days),
            ("constraints.maxEditingDays", self.max_editing_days),
        ] {
            if cap == Some(0) {
                errors.add(field, "must be at least 1 day");
            }
        }
        errors.into_result(())
    }
}

/// Everything the configurable calculator needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Selects the base duration table
    pub project_type: ProjectType,

    /// Scales every phase
    #[serde(default)]
    pub complexity: Complexity,

    /// Scales planning and editing
    #[serde(default)]
    pub team_size: TeamSize,

    /// First day of planning; tomorrow when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Optional caps and working days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ScheduleConstraints>,
}

impl ScheduleRequest {
    /// A request with default complexity and team size.
    pub fn new(project_type: ProjectType) -> Self {
        Self {
            project_type,
            complexity: Complexity::default(),
            team_size: TeamSize::default(),
            start_date: None,
            constraints: None,
        }
    }

    /// Set complexity.
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Set team size.
    pub fn with_team_size(mut self, team_size: TeamSize) -> Self {
        self.team_size = team_size;
        self
    }

    /// Set an explicit start date.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Set constraints.
    pub fn with_constraints(mut self, constraints: ScheduleConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// The explicit start date, or the day after `today`.
    ///
    /// `None` only when `today` is the last representable date.
    pub fn resolve_start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self.start_date {
            Some(date) => Some(date),
            None => today.succ_opt(),
        }
    }

    /// Working days in effect for this request.
    pub fn working_days(&self) -> WorkingDays {
        self.constraints
            .as_ref()
            .map(ScheduleConstraints::working_days)
            .unwrap_or_default()
    }

    /// Cap for one phase from the constraints, if any.
    pub fn cap_for(&self, phase: PhaseKind) -> Option<u32> {
        self.constraints.as_ref().and_then(|c| c.cap_for(phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_working_days_are_weekdays() {
        let days = WorkingDays::default();
        assert_eq!(days.days(), vec![1, 2, 3, 4, 5]);
        // 2025-01-04 is a Saturday, 2025-01-06 a Monday
        assert!(!days.contains(date(2025, 1, 4)));
        assert!(!days.contains(date(2025, 1, 5)));
        assert!(days.contains(date(2025, 1, 6)));
    }

    #[test]
    fn test_working_days_rejects_bad_input() {
        assert!(WorkingDays::new([]).is_err());
        assert!(WorkingDays::new([7]).is_err());
        assert!(serde_json::from_str::<WorkingDays>("[]").is_err());
        let days: WorkingDays = serde_json::from_str("[6, 0, 6]").unwrap();
        assert_eq!(days.days(), vec![0, 6]);
        assert_eq!(days.to_string(), "0,6");
    }

    #[test]
    fn test_constraints_zero_cap_rejected() {
        let constraints = ScheduleConstraints {
            max_shooting_days: Some(0),
            ..Default::default()
        };
        let errors = constraints.validate().unwrap_err();
        assert_eq!(errors.0[0].field, "constraints.maxShootingDays");
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: ScheduleRequest =
            serde_json::from_str(r#"{"projectType":"marketing"}"#).unwrap();
        assert_eq!(request.project_type, ProjectType::Marketing);
        assert_eq!(request.complexity, Complexity::Medium);
        assert_eq!(request.team_size.get(), 1);
        assert_eq!(request.working_days(), WorkingDays::WEEKDAYS);
        assert_eq!(request.cap_for(PhaseKind::Planning), None);
    }

    #[test]
    fn test_resolve_start_defaults_to_tomorrow() {
        let request = ScheduleRequest::new(ProjectType::Corporate);
        assert_eq!(request.resolve_start(date(2025, 1, 31)), Some(date(2025, 2, 1)));

        let request = request.with_start_date(date(2025, 3, 3));
        assert_eq!(request.resolve_start(date(2025, 1, 31)), Some(date(2025, 3, 3)));
    }
}
