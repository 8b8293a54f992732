//! Job execution loops
//!
//! One loop per running job, spawned by the service and owned by nobody:
//! the loop holds only its job id and re-reads authoritative state from the
//! job store for every write. Errors inside a cycle are logged and absorbed
//! as stats events; only deregistration from the active set ends a loop.

use crate::application::{engagement, schedule, ActiveJobs};
use crate::domain::{Job, JobSettings, PostRecord, StatsEvent};
use crate::error::Result;
use crate::port::{ContentProvider, JobStore, PostLog, Publisher, TimeProvider};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, info, warn};

pub struct JobRunner {
    jobs: Arc<dyn JobStore>,
    posts: Arc<dyn PostLog>,
    content: Arc<dyn ContentProvider>,
    publisher: Arc<dyn Publisher>,
    time: Arc<dyn TimeProvider>,
    active: Arc<ActiveJobs>,
}

impl JobRunner {
    pub fn new(
        jobs: Arc<dyn JobStore>,
        posts: Arc<dyn PostLog>,
        content: Arc<dyn ContentProvider>,
        publisher: Arc<dyn Publisher>,
        time: Arc<dyn TimeProvider>,
        active: Arc<ActiveJobs>,
    ) -> Self {
        Self {
            jobs,
            posts,
            content,
            publisher,
            time,
            active,
        }
    }

    /// Posting loop: one publish cycle per interval tick while the hour is
    /// inside the active window. First cycle fires immediately on entry.
    pub async fn run_posting_loop(&self, job: Job) {
        let job_id = job.id.clone();
        let settings = job.settings.clone();
        let interval = schedule::posting_interval(&settings);

        info!(
            job_id = %job_id,
            interval_minutes = interval.as_secs() / 60,
            "Posting loop started"
        );

        if schedule::in_active_window(self.time.hour_of_day(), &settings.posting_hours) {
            self.publish_cycle(&job_id, &settings).await;
        }

        loop {
            // Stop/pause is observed only here, after the sleep elapses
            sleep(interval).await;
            if !self.active.contains(&job_id) {
                break;
            }
            if schedule::in_active_window(self.time.hour_of_day(), &settings.posting_hours) {
                self.publish_cycle(&job_id, &settings).await;
            }
        }

        info!(job_id = %job_id, "Posting loop stopped");
    }

    /// Reply-monitoring loop: one mention check per 10-minute tick
    pub async fn run_reply_loop(&self, job: Job) {
        let job_id = job.id.clone();
        let keywords = job.settings.keywords.clone();

        info!(job_id = %job_id, keywords = ?keywords, "Reply loop started");

        loop {
            self.check_mentions(&job_id, &keywords).await;

            sleep(schedule::REPLY_CHECK_INTERVAL).await;
            if !self.active.contains(&job_id) {
                break;
            }
        }

        info!(job_id = %job_id, "Reply loop stopped");
    }

    /// One mention-check cycle
    ///
    /// TODO: wire a real mention poller through a platform collaborator;
    /// until one exists every check reports success.
    async fn check_mentions(&self, job_id: &str, _keywords: &[String]) {
        info!(job_id = %job_id, "Checking for mentions");
        self.record_stats(job_id, StatsEvent::ReplySuccess).await;
    }

    /// One publish cycle: generate, post-process, publish, log, count.
    /// Never propagates an error; failures become stats events.
    pub async fn publish_cycle(&self, job_id: &str, settings: &JobSettings) {
        if let Err(e) = self.try_publish(job_id, settings).await {
            error!(job_id = %job_id, error = %e, "Publish cycle failed");
            self.record_stats(job_id, StatsEvent::PostFailure).await;
        }
    }

    async fn try_publish(&self, job_id: &str, _settings: &JobSettings) -> Result<()> {
        info!(job_id = %job_id, "Executing publish cycle");

        let candidates = self.content.generate(1, None).await?;
        let Some(post) = candidates.into_iter().next() else {
            warn!(job_id = %job_id, "Content provider returned nothing");
            self.record_stats(job_id, StatsEvent::PostFailure).await;
            return Ok(());
        };

        let optimized = engagement::optimize_for_engagement(&post.content);
        let outcome = self.publisher.publish(&optimized).await?;

        if outcome.success {
            // Publisher-assigned id, or a time-based fallback
            let post_id = outcome
                .id
                .unwrap_or_else(|| self.time.now_millis().to_string());

            let topics = vec![
                post.topic.clone(),
                "PokemonTCG".to_string(),
                "TradeUp".to_string(),
            ];
            let record =
                PostRecord::new(&post_id, &optimized, &topics, self.time.now_millis());
            self.posts.append(&record).await?;

            self.record_stats(job_id, StatsEvent::PostSuccess).await;
            info!(
                job_id = %job_id,
                url = %self.publisher.url_for(&post_id),
                "Published post"
            );
        } else {
            warn!(
                job_id = %job_id,
                error = outcome.error.as_deref().unwrap_or("unknown error"),
                "Publish attempt failed"
            );
            self.record_stats(job_id, StatsEvent::PostFailure).await;
        }

        Ok(())
    }

    /// Re-read the job, apply the event, write it back. Read-then-write so
    /// a stop/pause that landed meanwhile is never clobbered by a stale
    /// snapshot. Errors here are logged only.
    async fn record_stats(&self, job_id: &str, event: StatsEvent) {
        let job = match self.jobs.find_by_id(&job_id.to_string()).await {
            Ok(Some(job)) => job,
            Ok(None) => return,
            Err(e) => {
                error!(job_id = %job_id, error = %e, "Stats update: job read failed");
                return;
            }
        };

        let mut job = job;
        job.stats.apply(event);
        if let Err(e) = self.jobs.update(&job).await {
            error!(job_id = %job_id, error = %e, "Stats update: job write failed");
        }
    }
}
