//! JSON file storage implementation.
//!
//! Stores one schedule per project as a JSON file under `schedules/` and keeps
//! a small per-project meta marker (version + updated_at) under
//! `meta/schedules/`.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::trait_::{validate_project_id, ScheduleStore, StoredSchedule};
use super::{Result, StorageError};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStorage {
    /// Create storage, creating the data and meta directories if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("schedules")).await?;
        fs::create_dir_all(root.join("meta").join("schedules")).await?;

        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn schedule_path(&self, project_id: &str) -> PathBuf {
        self.root
            .join("schedules")
            .join(format!("{}.json", project_id))
    }

    fn meta_path(&self, project_id: &str) -> PathBuf {
        self.root
            .join("meta")
            .join("schedules")
            .join(format!("{}.meta.json", project_id))
    }

    /// The version the next save of a project gets.
    ///
    /// The larger of the meta marker and the stored record, plus one.
    async fn next_version(&self, project_id: &str) -> u64 {
        let mut version = 0u64;
        if let Ok(s) = fs::read_to_string(self.meta_path(project_id)).await {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(&s) {
                if let Some(v) = json.get("version").and_then(|v| v.as_u64()) {
                    version = v;
                }
            }
        }
        if let Ok(Some(stored)) =
            read_json::<StoredSchedule>(&self.schedule_path(project_id)).await
        {
            version = version.max(stored.version);
        }
        version + 1
    }

    async fn write_version(&self, project_id: &str, version: u64) -> Result<()> {
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        write_atomic(&self.meta_path(project_id), &serde_json::to_string_pretty(&meta)?).await
    }
}

#[async_trait::async_trait]
impl ScheduleStore for JsonStorage {
    async fn save_schedule(&self, mut record: StoredSchedule) -> Result<StoredSchedule> {
        validate_project_id(&record.project_id)?;

        let _guard = self.write_lock.lock().await;
        record.version = self.next_version(&record.project_id).await;
        record.saved_at = chrono::Utc::now();

        // Data first, then the marker
        let json = serde_json::to_string_pretty(&record)?;
        write_atomic(&self.schedule_path(&record.project_id), &json).await?;
        self.write_version(&record.project_id, record.version).await?;

        debug!(project_id = %record.project_id, version = record.version, "saved schedule");
        Ok(record)
    }

    async fn load_schedule(&self, project_id: &str) -> Result<Option<StoredSchedule>> {
        validate_project_id(project_id)?;
        read_json(&self.schedule_path(project_id)).await
    }

    async fn list_schedules(&self) -> Result<Vec<StoredSchedule>> {
        let mut all: Vec<StoredSchedule> = list_dir(&self.root.join("schedules")).await?;
        all.sort_by(|a, b| a.project_id.cmp(&b.project_id));
        Ok(all)
    }

    async fn delete_schedule(&self, project_id: &str) -> Result<()> {
        validate_project_id(project_id)?;

        let _guard = self.write_lock.lock().await;
        match fs::remove_file(self.schedule_path(project_id)).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(format!("schedule for {}", project_id)));
            }
            Err(e) => return Err(e.into()),
        }
        // The meta marker is kept so versions keep increasing after a re-save.
        Ok(())
    }
}

/// Write through a sibling temp file and rename it into place.
async fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents.as_bytes()).await?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        if let Ok(Some(item)) = read_json(&entry.path()).await {
            items.push(item);
        }
    }
    Ok(items)
}
