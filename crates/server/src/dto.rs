//! Request parsing and response bodies for the HTTP API.

use serde::Serialize;
use serde_json::Value;
use vridge_core::validate::{validate_schedule_request, Fields};
use vridge_core::{
    CalculationFactors, FixedSchedule, ScheduleRequest, SchedulePhases, ScheduleResult, Time,
    ValidationErrors,
};
use vridge_schedule::FixedPhaseSpec;
use vridge_storage::StoredSchedule;

/// A validated schedule-calculation request body.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput {
    /// Project the schedule is for
    pub project_id: String,
    /// Calculator inputs
    pub request: ScheduleRequest,
    /// Informational budget
    pub budget: Option<f64>,
    /// Informational target duration in days
    pub target_duration: Option<u32>,
}

impl CalculationInput {
    /// Validate a raw body, collecting every field failure.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let (project_id, budget, target_duration) = match Fields::of(body, "body", "") {
            Ok(fields) => {
                let project_id = match fields.string("projectId", &mut errors) {
                    Some(id) if !id.trim().is_empty() => Some(id.to_string()),
                    Some(_) => {
                        errors.add("projectId", "projectId must not be empty");
                        None
                    }
                    None => {
                        if fields.get("projectId").is_none() {
                            errors.add("projectId", "projectId is required");
                        }
                        None
                    }
                };
                let budget = fields.non_negative_number("budget", &mut errors);
                let target_duration = fields.positive("targetDuration", &mut errors);
                (project_id, budget, target_duration)
            }
            Err(e) => return Err(e.into()),
        };

        let request = match validate_schedule_request(body) {
            Ok(request) => Some(request),
            Err(more) => {
                errors.extend(more);
                None
            }
        };

        match (project_id, request) {
            (Some(project_id), Some(request)) if errors.is_empty() => Ok(Self {
                project_id,
                request,
                budget,
                target_duration,
            }),
            _ => Err(errors),
        }
    }
}

/// Schedule returned by the schedule-calculation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedSchedule {
    /// Project the schedule is for
    pub project_id: String,
    /// Sum of phase durations
    pub total_days: u32,
    /// The three phases
    pub phases: SchedulePhases,
    /// Echo of the inputs
    pub calculation_factors: CalculationFactors,
    /// When the schedule was computed
    pub calculated_at: Time,
}

impl CalculatedSchedule {
    /// Wrap a calculator result.
    pub fn new(project_id: String, result: ScheduleResult, calculated_at: Time) -> Self {
        Self {
            project_id,
            total_days: result.total_days,
            phases: result.phases,
            calculation_factors: result.calculation_factors,
            calculated_at,
        }
    }
}

/// 200 body of `POST /api/schedule-calculation`.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleCalculationResponse {
    /// Always true
    pub success: bool,
    /// The computed schedule
    pub schedule: CalculatedSchedule,
}

/// 200 body of `POST /api/projects/{id}/auto-schedule`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScheduleResponse {
    /// Always true
    pub success: bool,
    /// The fixed schedule
    pub schedule: FixedSchedule,
    /// Always 22
    pub total_duration: u32,
    /// Project from the path
    pub project_id: String,
}

/// The static fixed-plan configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScheduleConfig {
    /// Phases in order, name and duration
    pub phases: Vec<FixedPhaseSpec>,
    /// Sum of durations
    pub total_duration: u32,
}

/// 200 body of `GET /api/projects/{id}/auto-schedule`.
#[derive(Debug, Clone, Serialize)]
pub struct AutoScheduleConfigResponse {
    /// Always true
    pub success: bool,
    /// The configuration
    pub config: AutoScheduleConfig,
}

/// 200 body of `GET /api/projects/{id}/schedule`.
#[derive(Debug, Clone, Serialize)]
pub struct StoredScheduleResponse {
    /// Always true
    pub success: bool,
    /// The stored record
    pub schedule: StoredSchedule,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,
    /// Crate version
    pub version: String,
    /// "enabled" or "disabled"
    pub storage: String,
}
