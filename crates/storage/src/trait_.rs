//! Storage trait abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vridge_core::{CalendarEntry, ComputedSchedule, Time};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Project id cannot be used as a storage key
    #[error("invalid project id '{0}': use 1-128 characters from [A-Za-z0-9_-]")]
    InvalidId(String),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A computed schedule persisted for a project, with the calendar entries
/// created from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSchedule {
    /// Owning project
    pub project_id: String,

    /// The schedule, tagged with the strategy that produced it
    pub schedule: ComputedSchedule,

    /// One entry per phase
    pub calendar_entries: Vec<CalendarEntry>,

    /// When this version was written
    pub saved_at: Time,

    /// Per-project write counter, starting at 1
    pub version: u64,
}

impl StoredSchedule {
    /// A record ready to save. The version is assigned by the store.
    pub fn new(
        project_id: impl Into<String>,
        schedule: ComputedSchedule,
        calendar_entries: Vec<CalendarEntry>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            schedule,
            calendar_entries,
            saved_at: chrono::Utc::now(),
            version: 0,
        }
    }
}

/// Check a project id is usable as a storage key.
pub fn validate_project_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id.len() <= 128
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidId(id.to_string()))
    }
}

/// Storage abstraction for computed schedules.
///
/// This trait allows different storage backends to be plugged in.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Save a schedule (create or replace). Returns the record as stored,
    /// with its new version.
    async fn save_schedule(&self, record: StoredSchedule) -> Result<StoredSchedule>;

    /// Load the schedule of a project.
    async fn load_schedule(&self, project_id: &str) -> Result<Option<StoredSchedule>>;

    /// List all stored schedules, ordered by project id.
    async fn list_schedules(&self) -> Result<Vec<StoredSchedule>>;

    /// Delete the schedule of a project.
    async fn delete_schedule(&self, project_id: &str) -> Result<()>;
}
