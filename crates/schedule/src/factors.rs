//! Complexity and team-size multipliers.
//!
//! Factors are held in thousandths so that `ceil` sees exact products.

use vridge_core::{Complexity, PhaseKind, TeamSize};

use crate::table::DurationRange;

const SCALE: u64 = 1000;

/// Team efficiency for sizes 1..=5; larger teams use the last entry.
const TEAM_EFFICIENCY_MILLI: [u32; 5] = [1000, 800, 700, 600, 550];

/// Complexity multiplier in thousandths.
pub fn complexity_milli(complexity: Complexity) -> u32 {
    match complexity {
        Complexity::Simple => 700,
        Complexity::Medium => 1000,
        Complexity::Complex => 1500,
    }
}

/// Team efficiency in thousandths.
pub fn team_efficiency_milli(team_size: TeamSize) -> u32 {
    let index = team_size.get().min(TEAM_EFFICIENCY_MILLI.len() as u32) as usize - 1;
    TEAM_EFFICIENCY_MILLI[index]
}

/// Complexity multiplier as a plain factor.
pub fn complexity_multiplier(complexity: Complexity) -> f64 {
    f64::from(complexity_milli(complexity)) / SCALE as f64
}

/// Team efficiency as a plain factor.
pub fn team_efficiency(team_size: TeamSize) -> f64 {
    f64::from(team_efficiency_milli(team_size)) / SCALE as f64
}

/// Whether a phase shrinks with a larger team. Camera days do not.
pub fn scales_with_team(phase: PhaseKind) -> bool {
    !matches!(phase, PhaseKind::Shooting)
}

/// Working days for one phase.
///
/// `ceil(min(default x complexity [x efficiency], cap))` where `cap` is the
/// caller's limit or the range maximum. Never less than one day.
pub fn phase_duration(
    range: DurationRange,
    phase: PhaseKind,
    complexity: Complexity,
    team_size: TeamSize,
    cap: Option<u32>,
) -> u32 {
    let mut numerator = u64::from(range.default) * u64::from(complexity_milli(complexity));
    let mut denominator = SCALE;
    if scales_with_team(phase) {
        numerator *= u64::from(team_efficiency_milli(team_size));
        denominator *= SCALE;
    }

    // caps are whole days, so ceil(min(raw, cap)) == min(ceil(raw), cap)
    let raw = u32::try_from(numerator.div_ceil(denominator)).unwrap_or(u32::MAX);
    raw.min(cap.unwrap_or(range.max)).max(1)
}
