//! HTTP surface for the VRidge schedule calculator.
//!
//! ```text
//! POST /api/schedule-calculation          configurable, business-day-aware
//! POST /api/projects/{id}/auto-schedule   fixed 7/1/14 calendar days
//! GET  /api/projects/{id}/auto-schedule   fixed plan configuration
//! GET  /api/projects/{id}/schedule        stored schedule, when persistence is on
//! GET  /health
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use vridge_schedule::{DurationTable, ScheduleCalculator};
use vridge_storage::JsonStorage;

pub use config::{ConfigError, ServerConfig};
pub use error::AppError;
pub use router::create_router;
pub use state::AppState;

/// Build application state from configuration: load the duration table and
/// open storage if configured.
pub async fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let table = match &config.tables_path {
        Some(path) => {
            let table = DurationTable::from_path(path)?;
            info!(path = %path.display(), "loaded duration table");
            table
        }
        None => DurationTable::default(),
    };

    let mut state = AppState::new(ScheduleCalculator::new(table)).with_dev_mode(config.dev_mode);

    if let Some(dir) = &config.storage_dir {
        let storage = JsonStorage::new(dir)
            .await
            .with_context(|| format!("failed to open storage at {}", dir.display()))?;
        info!(path = %dir.display(), "schedule storage enabled");
        state = state.with_store(Arc::new(storage));
    }

    Ok(state)
}

/// Bind and serve until the process is stopped.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr()?;
    let state = build_state(&config).await?;
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    if config.dev_mode {
        info!("dev mode: internal error details are returned to clients");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
