// Settings Store Port (Interface)

use crate::domain::BotSettings;
use crate::error::Result;
use async_trait::async_trait;

/// Whole-object persistence for bot settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read settings; unreadable data degrades to `Default`
    async fn load_or_default(&self) -> BotSettings;

    /// Rewrite the whole settings object
    async fn save(&self, settings: &BotSettings) -> Result<()>;
}

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// In-memory settings store for tests
    #[derive(Default)]
    pub struct InMemorySettingsStore {
        settings: Mutex<BotSettings>,
    }

    impl InMemorySettingsStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl SettingsStore for InMemorySettingsStore {
        async fn load_or_default(&self) -> BotSettings {
            self.settings.lock().unwrap().clone()
        }

        async fn save(&self, settings: &BotSettings) -> Result<()> {
            *self.settings.lock().unwrap() = settings.clone();
            Ok(())
        }
    }
}
