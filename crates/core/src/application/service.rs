//! Bot service: job lifecycle use cases
//!
//! create/start/stop/pause plus settings access. `start` spawns one
//! execution loop per job id; the active-set registry enforces at most one
//! loop per id.

use crate::application::{ActiveJobs, JobRunner};
use crate::domain::{BotSettings, Job, JobId, JobKind, JobSettings, JobStatus};
use crate::error::{AppError, Result};
use crate::port::{JobStore, SettingsStore, TimeProvider};
use std::sync::Arc;
use tracing::info;

pub struct BotService {
    jobs: Arc<dyn JobStore>,
    settings: Arc<dyn SettingsStore>,
    time: Arc<dyn TimeProvider>,
    active: Arc<ActiveJobs>,
    runner: Arc<JobRunner>,
}

impl BotService {
    pub fn new(
        jobs: Arc<dyn JobStore>,
        settings: Arc<dyn SettingsStore>,
        time: Arc<dyn TimeProvider>,
        active: Arc<ActiveJobs>,
        runner: Arc<JobRunner>,
    ) -> Self {
        Self {
            jobs,
            settings,
            time,
            active,
            runner,
        }
    }

    /// Create a new job in the `stopped` state
    pub async fn create_job(&self, kind: JobKind, settings: JobSettings) -> Result<Job> {
        let id = format!("{}-{}", kind, self.time.now_millis());
        let job = Job::new(id, kind, settings, self.time.now_millis());
        self.jobs.create(&job).await?;
        info!(job_id = %job.id, kind = %kind, "Created job");
        Ok(job)
    }

    /// Start a job's execution loop. No-op if a loop already owns the id.
    pub async fn start_job(&self, id: &JobId) -> Result<Job> {
        let mut job = self.find_or_not_found(id).await?;

        if !self.active.register(id) {
            info!(job_id = %id, "Job already running");
            return Ok(job);
        }

        info!(job_id = %id, kind = %job.kind, "Starting job");

        let runner = Arc::clone(&self.runner);
        let loop_job = job.clone();
        let handle = match job.kind {
            JobKind::Posting => tokio::spawn(async move {
                runner.run_posting_loop(loop_job).await;
            }),
            JobKind::ReplyMonitoring => tokio::spawn(async move {
                runner.run_reply_loop(loop_job).await;
            }),
        };
        self.active.attach(id, handle);

        job.status = JobStatus::Running;
        job.last_run = Some(self.time.now_millis());
        self.jobs.update(&job).await?;
        Ok(job)
    }

    /// Stop a job: deregister its loop and persist `stopped`
    pub async fn stop_job(&self, id: &JobId) -> Result<Job> {
        self.halt_job(id, JobStatus::Stopped).await
    }

    /// Pause a job: identical mechanics to stop, different persisted label
    pub async fn pause_job(&self, id: &JobId) -> Result<Job> {
        self.halt_job(id, JobStatus::Paused).await
    }

    async fn halt_job(&self, id: &JobId, status: JobStatus) -> Result<Job> {
        let mut job = self.find_or_not_found(id).await?;

        // The loop observes this at its next wake; no forced preemption
        self.active.deregister(id);

        job.status = status;
        job.next_run = None;
        self.jobs.update(&job).await?;
        info!(job_id = %id, status = %status, "Halted job");
        Ok(job)
    }

    pub async fn get_job(&self, id: &JobId) -> Result<Job> {
        self.find_or_not_found(id).await
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.jobs.list().await
    }

    pub async fn get_settings(&self) -> BotSettings {
        self.settings.load_or_default().await
    }

    pub async fn update_settings(&self, settings: BotSettings) -> Result<BotSettings> {
        self.settings.save(&settings).await?;
        Ok(settings)
    }

    async fn find_or_not_found(&self, id: &JobId) -> Result<Job> {
        self.jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::content_provider::mocks::MockContentProvider;
    use crate::port::job_store::mocks::InMemoryJobStore;
    use crate::port::post_log::mocks::InMemoryPostLog;
    use crate::port::publisher::mocks::MockPublisher;
    use crate::port::settings_store::mocks::InMemorySettingsStore;
    use crate::port::time_provider::mocks::FixedTimeProvider;

    // Hour 3 keeps posting loops outside the active window so lifecycle
    // tests never race a publish cycle.
    fn service_at_hour(hour: u32) -> (BotService, Arc<ActiveJobs>) {
        let jobs: Arc<dyn JobStore> = Arc::new(InMemoryJobStore::new());
        let time: Arc<dyn TimeProvider> = Arc::new(FixedTimeProvider::new(1_700_000_000_000, hour));
        let active = Arc::new(ActiveJobs::new());
        let runner = Arc::new(JobRunner::new(
            jobs.clone(),
            Arc::new(InMemoryPostLog::new()),
            Arc::new(MockContentProvider::new_fixed("Great pulls today!")),
            Arc::new(MockPublisher::new_success()),
            time.clone(),
            active.clone(),
        ));
        let service = BotService::new(
            jobs,
            Arc::new(InMemorySettingsStore::new()),
            time,
            active.clone(),
            runner,
        );
        (service, active)
    }

    #[tokio::test]
    async fn create_returns_stopped_job_with_unique_ids() {
        let (service, _) = service_at_hour(3);
        let a = service
            .create_job(JobKind::Posting, JobSettings::default())
            .await
            .unwrap();
        let b = service
            .create_job(JobKind::Posting, JobSettings::default())
            .await
            .unwrap();
        let c = service
            .create_job(JobKind::ReplyMonitoring, JobSettings::default())
            .await
            .unwrap();

        assert_eq!(a.status, JobStatus::Stopped);
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert!(a.id.starts_with("posting-"));
        assert!(c.id.starts_with("reply-monitoring-"));
    }

    #[tokio::test]
    async fn start_then_stop_leaves_no_active_loop() {
        let (service, active) = service_at_hour(3);
        let job = service
            .create_job(JobKind::Posting, JobSettings::default())
            .await
            .unwrap();

        let started = service.start_job(&job.id).await.unwrap();
        assert_eq!(started.status, JobStatus::Running);
        assert!(started.last_run.is_some());
        assert_eq!(active.count(), 1);

        let stopped = service.stop_job(&job.id).await.unwrap();
        assert_eq!(stopped.status, JobStatus::Stopped);
        assert!(stopped.next_run.is_none());
        assert_eq!(active.count(), 0);
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let (service, active) = service_at_hour(3);
        let job = service
            .create_job(JobKind::Posting, JobSettings::default())
            .await
            .unwrap();

        service.start_job(&job.id).await.unwrap();
        service.start_job(&job.id).await.unwrap();
        assert_eq!(active.count(), 1);
    }

    #[tokio::test]
    async fn pause_differs_from_stop_only_in_label() {
        let (service, active) = service_at_hour(3);
        let job = service
            .create_job(JobKind::ReplyMonitoring, JobSettings::default())
            .await
            .unwrap();

        service.start_job(&job.id).await.unwrap();
        let paused = service.pause_job(&job.id).await.unwrap();
        assert_eq!(paused.status, JobStatus::Paused);
        assert!(paused.next_run.is_none());
        assert_eq!(active.count(), 0);

        // start is the only way back to running, regardless of prior state
        let restarted = service.start_job(&job.id).await.unwrap();
        assert_eq!(restarted.status, JobStatus::Running);
        service.stop_job(&job.id).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_ids_fail_with_not_found() {
        let (service, _) = service_at_hour(3);
        let missing = "posting-0".to_string();

        for result in [
            service.start_job(&missing).await,
            service.stop_job(&missing).await,
            service.pause_job(&missing).await,
            service.get_job(&missing).await,
        ] {
            assert!(matches!(result, Err(AppError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn settings_round_trip() {
        let (service, _) = service_at_hour(3);
        let mut settings = service.get_settings().await;
        assert_eq!(settings.posts_per_day, 12);

        settings.posts_per_day = 4;
        settings.engagement_mode = "aggressive".to_string();
        service.update_settings(settings).await.unwrap();

        let reloaded = service.get_settings().await;
        assert_eq!(reloaded.posts_per_day, 4);
        assert_eq!(reloaded.engagement_mode, "aggressive");
    }
}
