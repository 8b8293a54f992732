// Job Store Port (Interface)

use crate::domain::{Job, JobId};
use crate::error::Result;
use async_trait::async_trait;

/// Persistence interface for the job collection
///
/// Implementations are whole-collection read-modify-write: every call loads
/// the full collection, scans by id, and rewrites the file. A missing or
/// corrupt backing file reads as an empty collection.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Append a new job to the collection
    async fn create(&self, job: &Job) -> Result<()>;

    /// Find job by ID
    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>>;

    /// All jobs, in insertion order
    async fn list(&self) -> Result<Vec<Job>>;

    /// Replace the job with the same id
    async fn update(&self, job: &Job) -> Result<()>;
}

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// In-memory job store for tests
    #[derive(Default)]
    pub struct InMemoryJobStore {
        jobs: Mutex<Vec<Job>>,
    }

    impl InMemoryJobStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl JobStore for InMemoryJobStore {
        async fn create(&self, job: &Job) -> Result<()> {
            self.jobs.lock().unwrap().push(job.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>> {
            Ok(self
                .jobs
                .lock()
                .unwrap()
                .iter()
                .find(|j| &j.id == id)
                .cloned())
        }

        async fn list(&self) -> Result<Vec<Job>> {
            Ok(self.jobs.lock().unwrap().clone())
        }

        async fn update(&self, job: &Job) -> Result<()> {
            let mut jobs = self.jobs.lock().unwrap();
            if let Some(slot) = jobs.iter_mut().find(|j| j.id == job.id) {
                *slot = job.clone();
            }
            Ok(())
        }
    }
}
