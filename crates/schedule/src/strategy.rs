//! Explicit selection between the two scheduling algorithms.

use chrono::NaiveDate;
use vridge_core::{ComputedSchedule, ScheduleRequest};

use crate::calculator::ScheduleCalculator;
use crate::days::Result;
use crate::fixed::fixed_schedule;

/// Which algorithm to run, with its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleStrategy {
    /// Multiplier-based, counts only working days
    Configurable(ScheduleRequest),
    /// Flat 7/1/14 calendar days from a required start date
    Fixed {
        /// First day of planning
        start_date: NaiveDate,
    },
}

impl ScheduleStrategy {
    /// Short name for logs and stored records.
    pub fn name(&self) -> &'static str {
        match self {
            ScheduleStrategy::Configurable(_) => "configurable",
            ScheduleStrategy::Fixed { .. } => "fixed",
        }
    }

    /// Run the selected algorithm.
    pub fn compute(&self, calculator: &ScheduleCalculator, today: NaiveDate) -> Result<ComputedSchedule> {
        match self {
            ScheduleStrategy::Configurable(request) => calculator
                .calculate(request, today)
                .map(ComputedSchedule::Configurable),
            ScheduleStrategy::Fixed { start_date } => {
                fixed_schedule(*start_date).map(ComputedSchedule::Fixed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vridge_core::ProjectType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_strategies_differ_on_weekends() {
        let calculator = ScheduleCalculator::default();
        let start = date(2025, 1, 1);

        let fixed = ScheduleStrategy::Fixed { start_date: start }
            .compute(&calculator, start)
            .unwrap();
        assert_eq!(fixed.total_days(), 22);
        assert_eq!(fixed.end_date(), date(2025, 1, 22));

        let configurable = ScheduleStrategy::Configurable(
            ScheduleRequest::new(ProjectType::Corporate).with_start_date(start),
        )
        .compute(&calculator, start)
        .unwrap();
        assert!(matches!(configurable, ComputedSchedule::Configurable(_)));
        assert_eq!(configurable.start_date(), start);
        assert_eq!(configurable.total_days(), 5 + 2 + 7);
    }

    #[test]
    fn test_names() {
        assert_eq!(
            ScheduleStrategy::Fixed { start_date: date(2025, 1, 1) }.name(),
            "fixed"
        );
        assert_eq!(
            ScheduleStrategy::Configurable(ScheduleRequest::new(ProjectType::Education)).name(),
            "configurable"
        );
    }
}
