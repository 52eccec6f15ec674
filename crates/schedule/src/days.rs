//! Calendar stepping.

use chrono::{Days, NaiveDate};
use vridge_core::WorkingDays;

/// Errors from schedule computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Stepping left the representable calendar
    #[error("date arithmetic overflowed the supported calendar range after {0}")]
    DateOutOfRange(NaiveDate),
}

/// Result type for schedule computation.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// The calendar day after `date`.
pub fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.succ_opt().ok_or(ScheduleError::DateOutOfRange(date))
}

/// `date` plus `days` calendar days.
pub fn add_calendar_days(date: NaiveDate, days: u32) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or(ScheduleError::DateOutOfRange(date))
}

/// The date on which the `days`-th working day after `start` falls.
///
/// Steps forward first and counts second, so `start` itself never counts
/// even when it is a working day. The returned date is always a working day
/// when `days > 0`.
pub fn advance_working_days(start: NaiveDate, days: u32, working: WorkingDays) -> Result<NaiveDate> {
    let mut current = start;
    let mut counted = 0;
    while counted < days {
        current = next_day(current)?;
        if working.contains(current) {
            counted += 1;
        }
    }
    Ok(current)
}

/// Working days strictly after `start` up to and including `end`.
#[cfg(test)]
pub(crate) fn count_working_days(start: NaiveDate, end: NaiveDate, working: WorkingDays) -> u32 {
    start
        .iter_days()
        .skip(1)
        .take_while(|d| *d <= end)
        .filter(|d| working.contains(*d))
        .count() as u32
}
