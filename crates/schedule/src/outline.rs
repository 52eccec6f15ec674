//! Display names, descriptions and typical tasks per phase.

use vridge_core::PhaseKind;

/// Static text attached to a phase.
#[derive(Debug, Clone, Copy)]
pub struct PhaseOutline {
    /// Short Korean label, as shown on the calendar
    pub label: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Typical tasks, in order
    pub tasks: &'static [&'static str],
}

const PLANNING: PhaseOutline = PhaseOutline {
    label: "기획",
    description: "기획 단계: 콘셉트 확정, 스크립트 작성, 촬영 준비",
    tasks: &[
        "콘셉트 기획",
        "스크립트 작성",
        "스토리보드 제작",
        "로케이션 헌팅",
        "캐스팅 및 스태프 구성",
    ],
};

const SHOOTING: PhaseOutline = PhaseOutline {
    label: "촬영",
    description: "촬영 단계: 현장 촬영 및 소스 확보",
    tasks: &["장비 점검", "현장 세팅", "본 촬영", "촬영 소스 백업"],
};

const EDITING: PhaseOutline = PhaseOutline {
    label: "편집",
    description: "편집 단계: 편집, 색보정, 사운드 작업 및 납품",
    tasks: &[
        "가편집",
        "피드백 반영",
        "색보정",
        "사운드 믹싱",
        "최종 렌더링 및 납품",
    ],
};

impl PhaseOutline {
    /// Outline for a phase.
    pub fn of(phase: PhaseKind) -> &'static PhaseOutline {
        match phase {
            PhaseKind::Planning => &PLANNING,
            PhaseKind::Shooting => &SHOOTING,
            PhaseKind::Editing => &EDITING,
        }
    }
}
