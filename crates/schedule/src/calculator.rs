//! Business-day-aware schedule calculation.

use chrono::NaiveDate;
use tracing::debug;
use vridge_core::{
    CalculationFactors, PhaseKind, PhaseResult, ScheduleRequest, ScheduleResult, SchedulePhases,
    WorkingDays,
};

use crate::days::{advance_working_days, next_day, Result, ScheduleError};
use crate::factors::{complexity_multiplier, phase_duration, team_efficiency};
use crate::outline::PhaseOutline;
use crate::table::DurationTable;

/// Working days per phase, before any dates are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDays {
    /// Pre-production
    pub planning: u32,
    /// Camera days
    pub shooting: u32,
    /// Post-production
    pub editing: u32,
}

impl PhaseDays {
    /// Sum of all phases.
    pub fn total(&self) -> u32 {
        self.planning + self.shooting + self.editing
    }
}

/// Computes three-phase schedules from project metadata.
#[derive(Debug, Clone, Default)]
pub struct ScheduleCalculator {
    table: DurationTable,
}

impl ScheduleCalculator {
    /// Create a calculator over a duration table.
    pub fn new(table: DurationTable) -> Self {
        Self { table }
    }

    /// The duration table in use.
    pub fn table(&self) -> &DurationTable {
        &self.table
    }

    /// Working days per phase for a request.
    pub fn phase_days(&self, request: &ScheduleRequest) -> PhaseDays {
        let days = |phase| {
            phase_duration(
                self.table.range(request.project_type, phase),
                phase,
                request.complexity,
                request.team_size,
                request.cap_for(phase),
            )
        };
        PhaseDays {
            planning: days(PhaseKind::Planning),
            shooting: days(PhaseKind::Shooting),
            editing: days(PhaseKind::Editing),
        }
    }

    /// Compute a schedule. `today` is only used when the request has no start date.
    pub fn calculate(&self, request: &ScheduleRequest, today: NaiveDate) -> Result<ScheduleResult> {
        let start = request
            .resolve_start(today)
            .ok_or(ScheduleError::DateOutOfRange(today))?;
        let days = self.phase_days(request);
        let working = request.working_days();

        let planning = build_phase(PhaseKind::Planning, start, days.planning, working)?;
        let shooting = build_phase(
            PhaseKind::Shooting,
            next_day(planning.end_date)?,
            days.shooting,
            working,
        )?;
        let editing = build_phase(
            PhaseKind::Editing,
            next_day(shooting.end_date)?,
            days.editing,
            working,
        )?;

        debug!(
            project_type = %request.project_type,
            complexity = %request.complexity,
            team_size = %request.team_size,
            planning = days.planning,
            shooting = days.shooting,
            editing = days.editing,
            start = %start,
            end = %editing.end_date,
            "calculated schedule"
        );

        Ok(ScheduleResult {
            total_days: days.total(),
            phases: SchedulePhases {
                planning,
                shooting,
                editing,
            },
            calculation_factors: CalculationFactors {
                project_type: request.project_type,
                complexity: request.complexity,
                team_size: request.team_size,
                complexity_multiplier: complexity_multiplier(request.complexity),
                team_efficiency: team_efficiency(request.team_size),
                working_days: working,
                constraints: request.constraints.clone(),
                budget: None,
                target_duration: None,
            },
        })
    }
}

fn build_phase(
    phase: PhaseKind,
    start_date: NaiveDate,
    duration: u32,
    working: WorkingDays,
) -> Result<PhaseResult> {
    let end_date = advance_working_days(start_date, duration, working)?;
    let outline = PhaseOutline::of(phase);
    Ok(PhaseResult {
        phase,
        duration,
        start_date,
        end_date,
        description: outline.description.to_string(),
        tasks: outline.tasks.iter().map(|t| t.to_string()).collect(),
    })
}
