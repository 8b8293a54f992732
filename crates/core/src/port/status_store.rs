// Status Store Port (Interface)

use crate::domain::PersistedStatus;
use crate::error::Result;
use async_trait::async_trait;

/// Whole-object persistence for the bot status file
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Read the status object; unreadable data degrades to `Default`
    async fn load_or_default(&self) -> PersistedStatus;

    /// Rewrite the whole status object
    async fn save(&self, status: &PersistedStatus) -> Result<()>;
}

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// In-memory status store for tests
    #[derive(Default)]
    pub struct InMemoryStatusStore {
        status: Mutex<PersistedStatus>,
    }

    impl InMemoryStatusStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl StatusStore for InMemoryStatusStore {
        async fn load_or_default(&self) -> PersistedStatus {
            self.status.lock().unwrap().clone()
        }

        async fn save(&self, status: &PersistedStatus) -> Result<()> {
            *self.status.lock().unwrap() = status.clone();
            Ok(())
        }
    }
}
