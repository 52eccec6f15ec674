//! Calendar entries derived from a computed schedule.

use vridge_core::{CalendarEntry, ComputedSchedule, PhaseKind};

use crate::outline::PhaseOutline;

/// One all-day entry per phase, in phase order.
pub fn calendar_entries(project_id: &str, schedule: &ComputedSchedule) -> Vec<CalendarEntry> {
    let spans: Vec<_> = match schedule {
        ComputedSchedule::Configurable(result) => result
            .phases
            .iter()
            .map(|p| (p.phase, p.start_date, p.end_date))
            .collect(),
        ComputedSchedule::Fixed(fixed) => PhaseKind::ALL
            .into_iter()
            .zip(fixed.iter())
            .map(|(kind, p)| (kind, p.start_date, p.end_date))
            .collect(),
    };

    spans
        .into_iter()
        .map(|(phase, start_date, end_date)| CalendarEntry {
            project_id: project_id.to_string(),
            phase,
            title: PhaseOutline::of(phase).label.to_string(),
            start_date,
            end_date,
            all_day: true,
        })
        .collect()
}
