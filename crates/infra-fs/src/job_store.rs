// JSON-file JobStore implementation

use crate::json_file;
use async_trait::async_trait;
use engager_core::domain::{Job, JobId};
use engager_core::port::JobStore;
use engager_core::Result;
use std::path::PathBuf;

/// Whole-collection job store backed by a single JSON array file
///
/// Every operation loads the entire collection, scans linearly by id, and
/// rewrites the file. Concurrent writers can lose updates; single-process
/// deployment is assumed.
pub struct JsonJobStore {
    path: PathBuf,
}

impl JsonJobStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let path = data_dir.into().join(crate::JOBS_FILE);
        json_file::init_if_missing(&path, &Vec::<Job>::new())?;
        Ok(Self { path })
    }

    fn load(&self) -> Vec<Job> {
        json_file::load_or_default(&self.path)
    }
}

#[async_trait]
impl JobStore for JsonJobStore {
    async fn create(&self, job: &Job) -> Result<()> {
        let mut jobs = self.load();
        jobs.push(job.clone());
        json_file::save(&self.path, &jobs)
    }

    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>> {
        Ok(self.load().into_iter().find(|j| &j.id == id))
    }

    async fn list(&self) -> Result<Vec<Job>> {
        Ok(self.load())
    }

    async fn update(&self, job: &Job) -> Result<()> {
        let mut jobs = self.load();
        if let Some(slot) = jobs.iter_mut().find(|j| j.id == job.id) {
            *slot = job.clone();
        }
        json_file::save(&self.path, &jobs)
    }
}
