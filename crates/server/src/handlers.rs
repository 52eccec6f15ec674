//! HTTP handlers for the REST API.
//!
//! Bodies are read as raw bytes and validated by hand so that malformed JSON
//! gets the same response shape as a schema violation.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::{info, warn};
use vridge_core::validate::required_start_date;
use vridge_core::{ComputedSchedule, ValidationError};
use vridge_schedule::{fixed_schedule, FIXED_PHASES, FIXED_TOTAL_DURATION};

use super::dto::{
    AutoScheduleConfig, AutoScheduleConfigResponse, AutoScheduleResponse, CalculatedSchedule,
    CalculationInput, HealthResponse, ScheduleCalculationResponse, StoredScheduleResponse,
};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: if state.store.is_some() { "enabled" } else { "disabled" }.to_string(),
    })
}

// =============================================================================
// Configurable schedule
// =============================================================================

/// POST /api/schedule-calculation
///
/// Compute a business-day-aware schedule from project metadata.
pub async fn calculate_schedule(
    State(state): State<AppState>,
    body: Bytes,
) -> HandlerResult<ScheduleCalculationResponse> {
    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        AppError::Validation(ValidationError::new("body", format!("invalid JSON: {e}")).into())
    })?;

    let input = CalculationInput::from_json(&value).map_err(|errors| {
        warn!(errors = %errors, "rejected schedule calculation");
        AppError::Validation(errors)
    })?;

    let mut result = state
        .calculator
        .calculate(&input.request, state.today())
        .map_err(|e| {
            warn!(project_id = %input.project_id, error = %e, "schedule calculation failed");
            AppError::calculation(e, state.dev_mode)
        })?;
    result.calculation_factors.budget = input.budget;
    result.calculation_factors.target_duration = input.target_duration;

    info!(
        project_id = %input.project_id,
        project_type = %input.request.project_type,
        total_days = result.total_days,
        "calculated schedule"
    );

    state
        .persist(&input.project_id, ComputedSchedule::Configurable(result.clone()))
        .await;

    Ok(Json(ScheduleCalculationResponse {
        success: true,
        schedule: CalculatedSchedule::new(input.project_id, result, chrono::Utc::now()),
    }))
}

// =============================================================================
// Fixed auto-schedule
// =============================================================================

/// POST /api/projects/{id}/auto-schedule
///
/// Lay out the fixed 7/1/14 plan from `startDate`.
pub async fn auto_schedule(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    body: Bytes,
) -> HandlerResult<AutoScheduleResponse> {
    let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|_| AppError::BadRequest("Invalid JSON body".to_string()))?
    };

    let start_date = required_start_date(&value).map_err(|e| {
        warn!(project_id = %project_id, error = %e, "rejected auto-schedule");
        AppError::from(e)
    })?;

    let schedule =
        fixed_schedule(start_date).map_err(|e| AppError::internal(e, state.dev_mode))?;

    info!(project_id = %project_id, start = %start_date, "auto-scheduled project");

    state
        .persist(&project_id, ComputedSchedule::Fixed(schedule.clone()))
        .await;

    Ok(Json(AutoScheduleResponse {
        success: true,
        total_duration: schedule.total_duration(),
        schedule,
        project_id,
    }))
}

/// GET /api/projects/{id}/auto-schedule
///
/// The static fixed-plan configuration.
pub async fn auto_schedule_config(Path(_project_id): Path<String>) -> Json<AutoScheduleConfigResponse> {
    Json(AutoScheduleConfigResponse {
        success: true,
        config: AutoScheduleConfig {
            phases: FIXED_PHASES.to_vec(),
            total_duration: FIXED_TOTAL_DURATION,
        },
    })
}

// =============================================================================
// Stored schedules
// =============================================================================

/// GET /api/projects/{id}/schedule
///
/// The schedule stored for a project, if persistence is enabled.
pub async fn get_stored_schedule(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> HandlerResult<StoredScheduleResponse> {
    let Some(store) = state.store.as_ref() else {
        return Err(AppError::NotFound("schedule storage is not enabled".to_string()));
    };

    let stored = store
        .load_schedule(&project_id)
        .await
        .map_err(|e| AppError::from_storage(e, state.dev_mode))?
        .ok_or_else(|| AppError::NotFound(format!("no schedule stored for project {project_id}")))?;

    Ok(Json(StoredScheduleResponse {
        success: true,
        schedule: stored,
    }))
}
