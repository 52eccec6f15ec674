//! Storage abstraction and implementations for computed schedules.
//!
//! Computation never persists anything itself; callers that want to keep a
//! schedule and its calendar entries go through [`ScheduleStore`].

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;

pub use trait_::{validate_project_id, Result, ScheduleStore, StorageError, StoredSchedule};
pub use json_storage::JsonStorage;
