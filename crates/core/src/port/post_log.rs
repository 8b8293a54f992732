// Post Log Port (Interface)

use crate::domain::PostRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Append-only log of publish attempts
#[async_trait]
pub trait PostLog: Send + Sync {
    /// Append one record to the log
    async fn append(&self, record: &PostRecord) -> Result<()>;

    /// Read the full log; missing or corrupt backing data reads as empty
    async fn read_all(&self) -> Result<Vec<PostRecord>>;
}

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// In-memory post log for tests
    #[derive(Default)]
    pub struct InMemoryPostLog {
        records: Mutex<Vec<PostRecord>>,
    }

    impl InMemoryPostLog {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl PostLog for InMemoryPostLog {
        async fn append(&self, record: &PostRecord) -> Result<()> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn read_all(&self) -> Result<Vec<PostRecord>> {
            Ok(self.records.lock().unwrap().clone())
        }
    }
}
