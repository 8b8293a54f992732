// JSON-file settings store

use crate::json_file;
use async_trait::async_trait;
use engager_core::domain::BotSettings;
use engager_core::port::SettingsStore;
use engager_core::Result;
use std::path::PathBuf;

/// Whole-object settings file, seeded with defaults on first run
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let path = data_dir.into().join(crate::SETTINGS_FILE);
        json_file::init_if_missing(&path, &BotSettings::default())?;
        Ok(Self { path })
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn load_or_default(&self) -> BotSettings {
        json_file::load_or_default(&self.path)
    }

    async fn save(&self, settings: &BotSettings) -> Result<()> {
        json_file::save(&self.path, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::new(dir.path()).unwrap();

        let mut settings = store.load_or_default().await;
        assert_eq!(settings.posts_per_day, 12);

        settings.posts_per_day = 6;
        settings.auto_reply = false;
        store.save(&settings).await.unwrap();

        let reloaded = store.load_or_default().await;
        assert_eq!(reloaded.posts_per_day, 6);
        assert!(!reloaded.auto_reply);
    }
}
