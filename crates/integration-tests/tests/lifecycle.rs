//! Job lifecycle over real flat-file stores
//!
//! Fixed hour 3 keeps posting loops outside the active window, so these
//! tests exercise lifecycle mechanics without racing publish cycles.

use std::sync::Arc;

use engager_core::application::{ActiveJobs, BotService, JobRunner};
use engager_core::domain::{JobKind, JobSettings, JobStatus};
use engager_core::error::AppError;
use engager_core::port::content_provider::mocks::MockContentProvider;
use engager_core::port::post_log::mocks::InMemoryPostLog;
use engager_core::port::publisher::mocks::MockPublisher;
use engager_core::port::time_provider::mocks::FixedTimeProvider;
use engager_core::port::{JobStore, SettingsStore, TimeProvider};
use engager_infra_fs::{JsonJobStore, JsonSettingsStore};

fn build_service(dir: &tempfile::TempDir, hour: u32) -> (BotService, Arc<ActiveJobs>, Arc<dyn JobStore>) {
    let jobs: Arc<dyn JobStore> = Arc::new(JsonJobStore::new(dir.path()).unwrap());
    let settings: Arc<dyn SettingsStore> = Arc::new(JsonSettingsStore::new(dir.path()).unwrap());
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
    let service = BotService::new(jobs.clone(), settings, time, active.clone(), runner);
    (service, active, jobs)
}

#[tokio::test]
async fn start_then_stop_leaves_stopped_status_and_no_active_loop() {
    let dir = tempfile::tempdir().unwrap();
    let (service, active, jobs) = build_service(&dir, 3);

    let job = service
        .create_job(JobKind::Posting, JobSettings::default())
        .await
        .unwrap();
    assert_eq!(job.status, JobStatus::Stopped);

    service.start_job(&job.id).await.unwrap();
    assert_eq!(active.count(), 1);

    service.stop_job(&job.id).await.unwrap();
    assert_eq!(active.count(), 0);

    let stored = jobs.find_by_id(&job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::Stopped);
    assert!(stored.next_run.is_none());
}

#[tokio::test]
async fn jobs_survive_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let job = {
        let (service, _, _) = build_service(&dir, 3);
        service
            .create_job(JobKind::ReplyMonitoring, JobSettings::default())
            .await
            .unwrap()
    };

    // New stores over the same data directory
    let (service, _, _) = build_service(&dir, 3);
    let reloaded = service.get_job(&job.id).await.unwrap();
    assert_eq!(reloaded.id, job.id);
    assert_eq!(reloaded.kind, JobKind::ReplyMonitoring);
    assert_eq!(reloaded.status, JobStatus::Stopped);
}

#[tokio::test]
async fn double_start_keeps_one_loop() {
    let dir = tempfile::tempdir().unwrap();
    let (service, active, _) = build_service(&dir, 3);

    let job = service
        .create_job(JobKind::Posting, JobSettings::default())
        .await
        .unwrap();
    service.start_job(&job.id).await.unwrap();
    service.start_job(&job.id).await.unwrap();
    assert_eq!(active.count(), 1);

    service.stop_job(&job.id).await.unwrap();
    assert_eq!(active.count(), 0);
}

#[tokio::test]
async fn pause_persists_its_own_label() {
    let dir = tempfile::tempdir().unwrap();
    let (service, active, jobs) = build_service(&dir, 3);

    let job = service
        .create_job(JobKind::Posting, JobSettings::default())
        .await
        .unwrap();
    service.start_job(&job.id).await.unwrap();
    service.pause_job(&job.id).await.unwrap();

    assert_eq!(active.count(), 0);
    let stored = jobs.find_by_id(&job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::Paused);

    // start is the only way back, regardless of paused vs stopped
    let restarted = service.start_job(&job.id).await.unwrap();
    assert_eq!(restarted.status, JobStatus::Running);
    service.stop_job(&job.id).await.unwrap();
}

#[tokio::test]
async fn operations_on_unknown_ids_fail_with_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _, _) = build_service(&dir, 3);

    let missing = "posting-0".to_string();
    assert!(matches!(
        service.start_job(&missing).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.stop_job(&missing).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_job(&missing).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn settings_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _, _) = build_service(&dir, 3);

    let mut settings = service.get_settings().await;
    settings.posts_per_day = 6;
    settings.keywords.push("Charizard ex".to_string());
    service.update_settings(settings).await.unwrap();

    let (service, _, _) = build_service(&dir, 3);
    let reloaded = service.get_settings().await;
    assert_eq!(reloaded.posts_per_day, 6);
    assert!(reloaded.keywords.contains(&"Charizard ex".to_string()));
}
