//! Application state for the HTTP server.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use vridge_core::ComputedSchedule;
use vridge_schedule::{calendar_entries, ScheduleCalculator};
use vridge_storage::{ScheduleStore, StoredSchedule};

type Today = dyn Fn() -> NaiveDate + Send + Sync;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Schedule calculator with the active duration table
    pub calculator: Arc<ScheduleCalculator>,
    /// Where computed schedules are kept, if persistence is enabled
    pub store: Option<Arc<dyn ScheduleStore>>,
    /// Expose internal error messages in responses
    pub dev_mode: bool,
    today: Arc<Today>,
}

impl AppState {
    /// Create state around a calculator, without persistence.
    pub fn new(calculator: ScheduleCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
            store: None,
            dev_mode: false,
            today: Arc::new(|| chrono::Utc::now().date_naive()),
        }
    }

    /// Enable persistence.
    pub fn with_store(mut self, store: Arc<dyn ScheduleStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Toggle dev mode.
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Replace the clock used to resolve a missing start date.
    pub fn with_today(mut self, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.today = Arc::new(today);
        self
    }

    /// Today's date (UTC unless overridden).
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    /// Store a schedule and its calendar entries when persistence is enabled.
    ///
    /// Failures are logged, not returned: the computed schedule is still valid.
    pub async fn persist(&self, project_id: &str, schedule: ComputedSchedule) -> Option<StoredSchedule> {
        let store = self.store.as_ref()?;
        let entries = calendar_entries(project_id, &schedule);
        match store
            .save_schedule(StoredSchedule::new(project_id, schedule, entries))
            .await
        {
            Ok(saved) => {
                info!(project_id, version = saved.version, "stored project schedule");
                Some(saved)
            }
            Err(e) => {
                warn!(project_id, error = %e, "failed to store project schedule");
                None
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScheduleCalculator::default())
    }
}
