//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use vridge_core::validate::StartDateError;
use vridge_core::{ValidationError, ValidationErrors};
use vridge_storage::StorageError;

const GENERIC_FAILURE: &str = "An unexpected error occurred";

/// Body of a 400 from the schedule-calculation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationFailureBody {
    /// Always "Validation failed"
    pub error: &'static str,
    /// Field-level failures
    pub details: Vec<ValidationError>,
    /// All failures joined into one line
    pub message: String,
}

/// Body of a 500 from the schedule-calculation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationFailureBody {
    /// Always "Failed to calculate schedule"
    pub error: &'static str,
    /// Internal detail in dev mode, a generic message otherwise
    pub message: String,
}

/// Body used by the project endpoints for every failure.
#[derive(Debug, Clone, Serialize)]
pub struct FailureBody {
    /// Always false
    pub success: bool,
    /// Error message
    pub error: String,
    /// Internal detail, dev mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Schema violations on the schedule-calculation endpoint
    Validation(ValidationErrors),
    /// Computation failed on the schedule-calculation endpoint
    Calculation(String),
    /// Bad start date on the auto-schedule endpoint
    StartDate(StartDateError),
    /// Any other invalid project-endpoint request
    BadRequest(String),
    /// Resource not found
    NotFound(String),
    /// Computation failed on a project endpoint
    Internal(String),
}

impl AppError {
    /// A calculation failure, hiding the detail unless `dev_mode`.
    pub fn calculation(err: impl std::fmt::Display, dev_mode: bool) -> Self {
        AppError::Calculation(detail(err, dev_mode))
    }

    /// An internal failure on a project endpoint, hiding the detail unless `dev_mode`.
    pub fn internal(err: impl std::fmt::Display, dev_mode: bool) -> Self {
        AppError::Internal(detail(err, dev_mode))
    }

    /// Map a storage failure on a read path.
    pub fn from_storage(err: StorageError, dev_mode: bool) -> Self {
        match err {
            StorageError::InvalidId(_) => AppError::BadRequest(err.to_string()),
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::internal(other, dev_mode),
        }
    }
}

fn detail(err: impl std::fmt::Display, dev_mode: bool) -> String {
    if dev_mode {
        err.to_string()
    } else {
        GENERIC_FAILURE.to_string()
    }
}

fn failure(status: StatusCode, error: impl Into<String>, message: Option<String>) -> Response {
    let body = FailureBody {
        success: false,
        error: error.into(),
        message,
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationFailureBody {
                    error: "Validation failed",
                    message: errors.to_string(),
                    details: errors.0,
                }),
            )
                .into_response(),
            AppError::Calculation(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CalculationFailureBody {
                    error: "Failed to calculate schedule",
                    message,
                }),
            )
                .into_response(),
            AppError::StartDate(e) => failure(StatusCode::BAD_REQUEST, e.to_string(), None),
            AppError::BadRequest(msg) => failure(StatusCode::BAD_REQUEST, msg, None),
            AppError::NotFound(msg) => failure(StatusCode::NOT_FOUND, msg, None),
            AppError::Internal(message) => failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to calculate schedule",
                Some(message),
            ),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<StartDateError> for AppError {
    fn from(err: StartDateError) -> Self {
        AppError::StartDate(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let errors: ValidationErrors = ValidationError::new("teamSize", "too big").into();
        assert_eq!(
            AppError::Validation(errors).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::StartDate(StartDateError::Missing).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::calculation("boom", false).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_detail_hidden_outside_dev_mode() {
        assert!(matches!(
            AppError::calculation("disk on fire", false),
            AppError::Calculation(m) if m == GENERIC_FAILURE
        ));
        assert!(matches!(
            AppError::calculation("disk on fire", true),
            AppError::Calculation(m) if m == "disk on fire"
        ));
    }

    #[test]
    fn test_storage_errors_map() {
        assert!(matches!(
            AppError::from_storage(StorageError::InvalidId("a/b".into()), false),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from_storage(StorageError::NotFound("p".into()), false),
            AppError::NotFound(_)
        ));
    }
}
