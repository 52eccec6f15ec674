//! Request validation from untyped JSON.
//!
//! Requests arrive as raw JSON so that every field problem can be reported at
//! once, with the field path, before anything is computed.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationErrors};
use crate::project::{Complexity, ProjectType, TeamSize};
use crate::request::{ScheduleConstraints, ScheduleRequest, WorkingDays};

/// Accepted date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    // chrono tolerates unpadded fields, the wire format does not
    if input.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// Why a fixed-variant start date was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StartDateError {
    /// Absent, null or empty
    #[error("startDate is required")]
    Missing,

    /// Not a `YYYY-MM-DD` string
    #[error("Invalid date format. Please provide date in YYYY-MM-DD format.")]
    InvalidFormat,
}

/// Read the required `startDate` of a fixed-variant request body.
pub fn required_start_date(body: &Value) -> Result<NaiveDate, StartDateError> {
    match body.get("startDate") {
        None | Some(Value::Null) => Err(StartDateError::Missing),
        Some(Value::String(s)) if s.is_empty() => Err(StartDateError::Missing),
        Some(Value::String(s)) => parse_date(s).ok_or(StartDateError::InvalidFormat),
        Some(_) => Err(StartDateError::InvalidFormat),
    }
}

/// Field accessor over a JSON object that treats `null` as absent.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    prefix: &'static str,
}

impl<'a> Fields<'a> {
    /// Wrap an object. Non-objects are reported under `field`.
    pub fn of(value: &'a Value, field: &str, prefix: &'static str) -> Result<Self, ValidationError> {
        value
            .as_object()
            .map(|map| Self { map, prefix })
            .ok_or_else(|| ValidationError::new(field, "must be a JSON object"))
    }

    /// Full path of a field.
    pub fn path(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// A present, non-null field.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    /// Optional string field.
    pub fn string(&self, name: &str, errors: &mut ValidationErrors) -> Option<&'a str> {
        match self.get(name)? {
            Value::String(s) => Some(s.as_str()),
            _ => {
                errors.add(self.path(name), "must be a string");
                None
            }
        }
    }

    /// Optional non-negative integer field.
    pub fn unsigned(&self, name: &str, errors: &mut ValidationErrors) -> Option<u64> {
        let value = self.get(name)?;
        match whole_number(value) {
            Some(n) => Some(n),
            None => {
                errors.add(self.path(name), "must be a non-negative integer");
                None
            }
        }
    }

    /// Optional positive integer field that fits in `u32`.
    pub fn positive(&self, name: &str, errors: &mut ValidationErrors) -> Option<u32> {
        let n = self.unsigned(name, errors)?;
        match u32::try_from(n) {
            Ok(n) if n >= 1 => Some(n),
            _ => {
                errors.add(self.path(name), "must be a positive integer");
                None
            }
        }
    }

    /// Optional non-negative number field.
    pub fn non_negative_number(&self, name: &str, errors: &mut ValidationErrors) -> Option<f64> {
        match self.get(name)?.as_f64() {
            Some(n) if n >= 0.0 => Some(n),
            _ => {
                errors.add(self.path(name), "must be a non-negative number");
                None
            }
        }
    }

    /// Optional `YYYY-MM-DD` field.
    pub fn date(&self, name: &str, errors: &mut ValidationErrors) -> Option<NaiveDate> {
        let raw = self.string(name, errors)?;
        let parsed = parse_date(raw);
        if parsed.is_none() {
            errors.add(self.path(name), format!("invalid date '{raw}', expected YYYY-MM-DD"));
        }
        parsed
    }
}

/// A non-negative integer, including whole floats such as `3.0`.
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64)
            .map(|n| n as u64)
    })
}

/// Validate the schedule fields of a request body.
///
/// Unknown fields are ignored. All failures are collected.
pub fn validate_schedule_request(body: &Value) -> Result<ScheduleRequest, ValidationErrors> {
    let fields = Fields::of(body, "body", "")?;
    let mut errors = ValidationErrors::new();

    let project_type = match fields.string("projectType", &mut errors) {
        Some(raw) => match raw.parse::<ProjectType>() {
            Ok(ty) => Some(ty),
            Err(e) => {
                errors.add("projectType", e.to_string());
                None
            }
        },
        None => {
            if fields.get("projectType").is_none() {
                errors.add("projectType", "projectType is required");
            }
            None
        }
    };

    let complexity = fields
        .string("complexity", &mut errors)
        .and_then(|raw| match raw.parse::<Complexity>() {
            Ok(c) => Some(c),
            Err(e) => {
                errors.add("complexity", e.to_string());
                None
            }
        })
        .unwrap_or_default();

    let team_size = match fields.get("teamSize") {
        None => TeamSize::default(),
        Some(value) => match whole_number(value) {
            Some(n) => u32::try_from(n)
                .map_err(|_| ValidationError::new("teamSize", "teamSize is out of range"))
                .and_then(TeamSize::new)
                .unwrap_or_else(|e| {
                    errors.push(e);
                    TeamSize::default()
                }),
            None => {
                errors.add("teamSize", "teamSize must be an integer between 1 and 50");
                TeamSize::default()
            }
        },
    };

    let start_date = fields.date("startDate", &mut errors);

    let constraints = fields
        .get("constraints")
        .and_then(|value| validate_constraints(value, &mut errors));

    let request = project_type.map(|project_type| ScheduleRequest {
        project_type,
        complexity,
        team_size,
        start_date,
        constraints,
    });

    match request {
        Some(request) if errors.is_empty() => Ok(request),
        _ => Err(errors),
    }
}

fn validate_constraints(value: &Value, errors: &mut ValidationErrors) -> Option<ScheduleConstraints> {
    let fields = match Fields::of(value, "constraints", "constraints.") {
        Ok(fields) => fields,
        Err(e) => {
            errors.push(e);
            return None;
        }
    };

    let constraints = ScheduleConstraints {
        max_planning_days: fields.positive("maxPlanningDays", errors),
        max_shooting_days: fields.positive("maxShootingDays", errors),
        max_editing_days: fields.positive("maxEditingDays", errors),
        available_weekdays: fields
            .get("availableWeekdays")
            .and_then(|v| validate_weekdays(v, &fields.path("availableWeekdays"), errors)),
    };
    Some(constraints)
}

fn validate_weekdays(value: &Value, path: &str, errors: &mut ValidationErrors) -> Option<WorkingDays> {
    let Some(items) = value.as_array() else {
        errors.add(path, "must be an array of weekday numbers");
        return None;
    };

    let mut days = Vec::with_capacity(items.len());
    for item in items {
        match item.as_u64().and_then(|d| u8::try_from(d).ok()) {
            Some(day) => days.push(day),
            None => {
                errors.add(path, format!("invalid weekday {item}"));
                return None;
            }
        }
    }

    match WorkingDays::new(days) {
        Ok(days) => Some(days),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}
