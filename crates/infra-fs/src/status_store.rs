// JSON-file status store

use crate::json_file;
use async_trait::async_trait;
use engager_core::domain::PersistedStatus;
use engager_core::port::StatusStore;
use engager_core::Result;
use std::path::PathBuf;

/// Whole-object status file, seeded with the canned all-zero object on
/// first run
pub struct JsonStatusStore {
    path: PathBuf,
}

impl JsonStatusStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let path = data_dir.into().join(crate::STATUS_FILE);
        json_file::init_if_missing(&path, &PersistedStatus::default())?;
        Ok(Self { path })
    }
}

#[async_trait]
impl StatusStore for JsonStatusStore {
    async fn load_or_default(&self) -> PersistedStatus {
        json_file::load_or_default(&self.path)
    }

    async fn save(&self, status: &PersistedStatus) -> Result<()> {
        json_file::save(&self.path, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_default_status_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStatusStore::new(dir.path()).unwrap();

        assert!(dir.path().join(crate::STATUS_FILE).exists());
        let status = store.load_or_default().await;
        assert!(!status.running);
        assert_eq!(status.stats.posts_today, 0);
        assert_eq!(status.stats.success_rate, 100);
    }

    #[tokio::test]
    async fn corrupt_status_degrades_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStatusStore::new(dir.path()).unwrap();
        std::fs::write(dir.path().join(crate::STATUS_FILE), "][").unwrap();

        let status = store.load_or_default().await;
        assert!(!status.running);
    }
}
