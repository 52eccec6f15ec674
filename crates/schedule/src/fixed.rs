//! Fixed 7/1/14 calendar-day schedule.
//!
//! Phases run back to back on flat calendar days with no weekday awareness.
//! Each phase spans `duration` days inclusive of its start date.

use chrono::NaiveDate;
use serde::Serialize;
use vridge_core::{FixedPhase, FixedSchedule, PhaseKind};

use crate::days::{add_calendar_days, next_day, Result};

/// A phase of the fixed plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedPhaseSpec {
    /// Which phase
    #[serde(skip)]
    pub kind: PhaseKind,
    /// Display name
    pub name: &'static str,
    /// Calendar days
    pub duration: u32,
}

/// The fixed plan, in order.
pub const FIXED_PHASES: [FixedPhaseSpec; 3] = [
    FixedPhaseSpec {
        kind: PhaseKind::Planning,
        name: "기획",
        duration: 7,
    },
    FixedPhaseSpec {
        kind: PhaseKind::Shooting,
        name: "촬영",
        duration: 1,
    },
    FixedPhaseSpec {
        kind: PhaseKind::Editing,
        name: "편집",
        duration: 14,
    },
];

/// Total calendar days of the fixed plan.
pub const FIXED_TOTAL_DURATION: u32 = 22;

/// Lay the fixed plan out from `start`.
pub fn fixed_schedule(start: NaiveDate) -> Result<FixedSchedule> {
    let [planning, shooting, editing] = FIXED_PHASES;
    let planning = fixed_phase(planning, start)?;
    let shooting = fixed_phase(shooting, next_day(planning.end_date)?)?;
    let editing = fixed_phase(editing, next_day(shooting.end_date)?)?;
    Ok(FixedSchedule {
        planning,
        shooting,
        editing,
    })
}

fn fixed_phase(phase: FixedPhaseSpec, start_date: NaiveDate) -> Result<FixedPhase> {
    Ok(FixedPhase {
        name: phase.name.to_string(),
        start_date,
        end_date: add_calendar_days(start_date, phase.duration.saturating_sub(1))?,
        duration: phase.duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::PhaseOutline;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_names_match_calendar_labels() {
        for phase in FIXED_PHASES {
            assert_eq!(phase.name, PhaseOutline::of(phase.kind).label);
        }
    }

    #[test]
    fn test_total_matches_phases() {
        let total: u32 = FIXED_PHASES.iter().map(|p| p.duration).sum();
        assert_eq!(total, FIXED_TOTAL_DURATION);
    }

    #[test]
    fn test_new_year_example() {
        let schedule = fixed_schedule(date(2025, 1, 1)).unwrap();

        assert_eq!(schedule.planning.name, "기획");
        assert_eq!(schedule.planning.start_date, date(2025, 1, 1));
        assert_eq!(schedule.planning.end_date, date(2025, 1, 7));
        assert_eq!(schedule.planning.duration, 7);

        assert_eq!(schedule.shooting.name, "촬영");
        assert_eq!(schedule.shooting.start_date, date(2025, 1, 8));
        assert_eq!(schedule.shooting.end_date, date(2025, 1, 8));
        assert_eq!(schedule.shooting.duration, 1);

        assert_eq!(schedule.editing.name, "편집");
        assert_eq!(schedule.editing.start_date, date(2025, 1, 9));
        assert_eq!(schedule.editing.end_date, date(2025, 1, 22));
        assert_eq!(schedule.editing.duration, 14);

        assert_eq!(schedule.total_duration(), 22);
    }

    #[test]
    fn test_month_boundary() {
        let schedule = fixed_schedule(date(2025, 1, 25)).unwrap();
        assert_eq!(schedule.planning.end_date, date(2025, 1, 31));
        assert_eq!(schedule.shooting.start_date, date(2025, 2, 1));
        assert_eq!(schedule.editing.end_date, date(2025, 2, 15));
    }

    #[test]
    fn test_weekends_are_not_skipped() {
        // Saturday start
        let schedule = fixed_schedule(date(2025, 1, 4)).unwrap();
        assert_eq!(schedule.planning.end_date, date(2025, 1, 10));
        assert_eq!(schedule.shooting.start_date, date(2025, 1, 11));
        assert_eq!(schedule.shooting.end_date, date(2025, 1, 11));
    }

    #[test]
    fn test_leap_day() {
        let schedule = fixed_schedule(date(2024, 2, 25)).unwrap();
        assert_eq!(schedule.planning.end_date, date(2024, 3, 2));
    }

    #[test]
    fn test_end_of_calendar_is_an_error() {
        assert!(fixed_schedule(NaiveDate::MAX).is_err());
    }
}
