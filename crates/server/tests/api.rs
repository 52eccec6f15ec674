use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;
use vridge_schedule::ScheduleCalculator;
use vridge_server::{create_router, AppState};
use vridge_storage::JsonStorage;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn app() -> Router {
    create_router(AppState::new(ScheduleCalculator::default()).with_today(fixed_today))
}

async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(&body.to_string())).await
}

// =============================================================================
// Fixed auto-schedule
// =============================================================================

#[tokio::test]
async fn test_auto_schedule_new_year() {
    let (status, body) = post_json(
        app(),
        "/api/projects/proj-1/auto-schedule",
        json!({"startDate": "2025-01-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["projectId"], "proj-1");
    assert_eq!(body["totalDuration"], 22);

    let schedule = &body["schedule"];
    assert_eq!(
        schedule["planning"],
        json!({"name": "기획", "startDate": "2025-01-01", "endDate": "2025-01-07", "duration": 7})
    );
    assert_eq!(
        schedule["shooting"],
        json!({"name": "촬영", "startDate": "2025-01-08", "endDate": "2025-01-08", "duration": 1})
    );
    assert_eq!(
        schedule["editing"],
        json!({"name": "편집", "startDate": "2025-01-09", "endDate": "2025-01-22", "duration": 14})
    );
}

#[tokio::test]
async fn test_auto_schedule_month_boundary() {
    let (status, body) = post_json(
        app(),
        "/api/projects/proj-1/auto-schedule",
        json!({"startDate": "2025-01-25"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["schedule"]["planning"]["endDate"], "2025-01-31");
    assert_eq!(body["schedule"]["shooting"]["startDate"], "2025-02-01");
    assert_eq!(body["schedule"]["editing"]["endDate"], "2025-02-15");
}

#[tokio::test]
async fn test_auto_schedule_missing_start_date() {
    let (status, body) = post_json(app(), "/api/projects/proj-1/auto-schedule", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "startDate is required"}));

    let (status, body) = send(app(), "POST", "/api/projects/proj-1/auto-schedule", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "startDate is required");
}

#[tokio::test]
async fn test_auto_schedule_invalid_date() {
    let (status, body) = post_json(
        app(),
        "/api/projects/proj-1/auto-schedule",
        json!({"startDate": "invalid-date"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Invalid date format. Please provide date in YYYY-MM-DD format."
        })
    );
}

#[tokio::test]
async fn test_auto_schedule_malformed_json() {
    let (status, body) = send(
        app(),
        "POST",
        "/api/projects/proj-1/auto-schedule",
        Some("{startDate:"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_auto_schedule_config() {
    let (status, body) = send(app(), "GET", "/api/projects/proj-1/auto-schedule", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "config": {
                "phases": [
                    {"name": "기획", "duration": 7},
                    {"name": "촬영", "duration": 1},
                    {"name": "편집", "duration": 14}
                ],
                "totalDuration": 22
            }
        })
    );
}

// =============================================================================
// Configurable schedule
// =============================================================================

#[tokio::test]
async fn test_schedule_calculation() {
    let (status, body) = post_json(
        app(),
        "/api/schedule-calculation",
        json!({
            "projectId": "p-7",
            "projectType": "corporate",
            "complexity": "medium",
            "teamSize": 3,
            "startDate": "2025-01-01",
            "budget": 5000000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let schedule = &body["schedule"];
    assert_eq!(schedule["projectId"], "p-7");
    assert_eq!(schedule["totalDays"], 11);
    assert!(schedule["calculatedAt"].is_string());

    let planning = &schedule["phases"]["planning"];
    assert_eq!(planning["phase"], "planning");
    assert_eq!(planning["duration"], 4);
    assert_eq!(planning["startDate"], "2025-01-01");
    assert_eq!(planning["endDate"], "2025-01-07");
    assert!(planning["tasks"].as_array().is_some_and(|t| !t.is_empty()));

    assert_eq!(schedule["phases"]["shooting"]["startDate"], "2025-01-08");
    assert_eq!(schedule["phases"]["editing"]["startDate"], "2025-01-11");
    assert_eq!(schedule["phases"]["editing"]["endDate"], "2025-01-17");

    let factors = &schedule["calculationFactors"];
    assert_eq!(factors["projectType"], "corporate");
    assert_eq!(factors["teamSize"], 3);
    assert_eq!(factors["teamEfficiency"], 0.7);
    assert_eq!(factors["complexityMultiplier"], 1.0);
    assert_eq!(factors["workingDays"], json!([1, 2, 3, 4, 5]));
    assert_eq!(factors["budget"], 5000000.0);
}

#[tokio::test]
async fn test_schedule_calculation_defaults_to_tomorrow() {
    let (status, body) = post_json(
        app(),
        "/api/schedule-calculation",
        json!({"projectId": "p-7", "projectType": "education"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["schedule"]["phases"]["planning"]["startDate"], "2025-03-15");
    assert_eq!(body["schedule"]["calculationFactors"]["complexity"], "medium");
    assert_eq!(body["schedule"]["calculationFactors"]["teamSize"], 1);
}

#[tokio::test]
async fn test_schedule_calculation_with_constraints() {
    let (status, body) = post_json(
        app(),
        "/api/schedule-calculation",
        json!({
            "projectId": "p-8",
            "projectType": "marketing",
            "complexity": "complex",
            "startDate": "2025-01-01",
            "constraints": {
                "maxPlanningDays": 2,
                "maxEditingDays": 3,
                "availableWeekdays": [0, 1, 2, 3, 4, 5, 6]
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let phases = &body["schedule"]["phases"];
    assert_eq!(phases["planning"]["duration"], 2);
    assert_eq!(phases["planning"]["endDate"], "2025-01-03");
    assert_eq!(phases["shooting"]["duration"], 5);
    assert_eq!(phases["editing"]["duration"], 3);
    assert_eq!(phases["editing"]["endDate"], "2025-01-13");
    assert_eq!(body["schedule"]["totalDays"], 10);
}

#[tokio::test]
async fn test_schedule_calculation_validation_failure() {
    let (status, body) = post_json(
        app(),
        "/api/schedule-calculation",
        json!({
            "projectId": "p-1",
            "projectType": "documentary",
            "teamSize": 51
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["field"], "projectType");
    assert_eq!(details[1]["field"], "teamSize");
    assert!(body["message"].as_str().unwrap().contains("teamSize"));
}

#[tokio::test]
async fn test_schedule_calculation_bad_date() {
    let (status, body) = post_json(
        app(),
        "/api/schedule-calculation",
        json!({"projectId": "p-1", "projectType": "corporate", "startDate": "2025-13-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "startDate");
}

#[tokio::test]
async fn test_schedule_calculation_malformed_json() {
    let (status, body) = send(app(), "POST", "/api/schedule-calculation", Some("not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "body");
}

#[tokio::test]
async fn test_schedule_calculation_internal_error_hides_detail() {
    let state = AppState::new(ScheduleCalculator::default()).with_today(|| NaiveDate::MAX);
    let (status, body) = post_json(
        create_router(state),
        "/api/schedule-calculation",
        json!({"projectId": "p-1", "projectType": "corporate"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to calculate schedule");
    assert_eq!(body["message"], "An unexpected error occurred");

    let state = AppState::new(ScheduleCalculator::default())
        .with_today(|| NaiveDate::MAX)
        .with_dev_mode(true);
    let (_, body) = post_json(
        create_router(state),
        "/api/schedule-calculation",
        json!({"projectId": "p-1", "projectType": "corporate"}),
    )
    .await;
    assert!(body["message"].as_str().unwrap().contains("overflowed"));
}

// =============================================================================
// Persistence and health
// =============================================================================

#[tokio::test]
async fn test_stored_schedule_requires_storage() {
    let (status, body) = send(app(), "GET", "/api/projects/p-1/schedule", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_schedules_are_stored_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path()).await.unwrap();
    let state = AppState::new(ScheduleCalculator::default())
        .with_today(fixed_today)
        .with_store(Arc::new(storage));
    let app = create_router(state);

    let (status, _) = post_json(
        app.clone(),
        "/api/projects/film-1/auto-schedule",
        json!({"startDate": "2025-01-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app.clone(), "GET", "/api/projects/film-1/schedule", None).await;
    assert_eq!(status, StatusCode::OK);
    let stored = &body["schedule"];
    assert_eq!(stored["projectId"], "film-1");
    assert_eq!(stored["version"], 1);
    assert_eq!(stored["schedule"]["strategy"], "fixed");
    assert_eq!(stored["calendarEntries"].as_array().unwrap().len(), 3);
    assert_eq!(stored["calendarEntries"][2]["endDate"], "2025-01-22");

    let (status, _) = post_json(
        app.clone(),
        "/api/schedule-calculation",
        json!({"projectId": "film-1", "projectType": "marketing", "startDate": "2025-01-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app.clone(), "GET", "/api/projects/film-1/schedule", None).await;
    assert_eq!(body["schedule"]["version"], 2);
    assert_eq!(body["schedule"]["schedule"]["strategy"], "configurable");

    let (status, _) = send(app, "GET", "/api/projects/other/schedule", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "disabled");
}
