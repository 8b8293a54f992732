//! Status, metrics, and post-history views
//!
//! Every read degrades to zero/default data; the reporting surface never
//! hard-fails.

use crate::application::ActiveJobs;
use crate::domain::JobStats;
use crate::port::{PostLog, StatusStore, TimeProvider};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Follower count placeholder: the external data source was never
/// integrated.
const FOLLOWERS_PLACEHOLDER: i64 = 0;

/// Persisted status merged with the live active-loop count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub running: bool,
    pub active_jobs: usize,
    pub uptime: Option<String>,
    pub last_run: Option<i64>,
    pub stats: JobStats,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub total_posts: u64,
    pub total_likes: i64,
    pub avg_engagement: f64,
    pub followers: i64,
    pub last_updated: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Engagement {
    pub likes: i64,
    pub retweets: i64,
    pub replies: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: String,
    pub content: String,
    pub engagement: Engagement,
    pub timestamp: i64,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedPosts {
    pub posts: Vec<PostView>,
    pub total: usize,
    pub has_more: bool,
}

pub struct Reporter {
    posts: Arc<dyn PostLog>,
    status: Arc<dyn StatusStore>,
    active: Arc<ActiveJobs>,
    time: Arc<dyn TimeProvider>,
}

impl Reporter {
    pub fn new(
        posts: Arc<dyn PostLog>,
        status: Arc<dyn StatusStore>,
        active: Arc<ActiveJobs>,
        time: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            posts,
            status,
            active,
            time,
        }
    }

    pub async fn get_status(&self) -> StatusSummary {
        let persisted = self.status.load_or_default().await;
        let active_jobs = self.active.count();
        StatusSummary {
            running: active_jobs > 0,
            active_jobs,
            uptime: persisted.uptime,
            last_run: persisted.last_run,
            stats: persisted.stats,
        }
    }

    pub async fn get_metrics(&self) -> MetricsSummary {
        let records = self.posts.read_all().await.unwrap_or_else(|e| {
            warn!(error = %e, "Post log unreadable; reporting zero metrics");
            Vec::new()
        });

        let total_posts = records.len() as u64;
        let total_likes: i64 = records.iter().map(|r| r.likes).sum();
        let avg_engagement = if records.is_empty() {
            0.0
        } else {
            total_likes as f64 / records.len() as f64
        };

        MetricsSummary {
            total_posts,
            total_likes,
            avg_engagement,
            followers: FOLLOWERS_PLACEHOLDER,
            last_updated: self.time.now_millis(),
        }
    }

    /// Post history, newest first, paginated
    pub async fn get_posts(&self, limit: usize, offset: usize) -> PagedPosts {
        let mut records = self.posts.read_all().await.unwrap_or_else(|e| {
            warn!(error = %e, "Post log unreadable; reporting empty history");
            Vec::new()
        });
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let total = records.len();
        let posts: Vec<PostView> = records
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|r| PostView {
                id: r.id.clone(),
                content: r.content.clone(),
                engagement: Engagement {
                    likes: r.likes,
                    retweets: r.retweets,
                    replies: r.replies,
                },
                timestamp: r.timestamp,
                topics: r.topics_list(),
            })
            .collect();

        PagedPosts {
            posts,
            total,
            has_more: offset + limit < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostRecord;
    use crate::port::post_log::mocks::InMemoryPostLog;
    use crate::port::status_store::mocks::InMemoryStatusStore;
    use crate::port::time_provider::mocks::FixedTimeProvider;

    fn reporter_with(posts: Arc<InMemoryPostLog>, active: Arc<ActiveJobs>) -> Reporter {
        Reporter::new(
            posts,
            Arc::new(InMemoryStatusStore::new()),
            active,
            Arc::new(FixedTimeProvider::new(1_000, 12)),
        )
    }

    async fn seed_three(posts: &InMemoryPostLog) {
        for (id, ts) in [("a", 100), ("b", 300), ("c", 200)] {
            posts
                .append(&PostRecord::new(id, format!("post {id}"), &[], ts))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn metrics_on_empty_log_are_all_zero() {
        let reporter = reporter_with(Arc::new(InMemoryPostLog::new()), Arc::new(ActiveJobs::new()));
        let metrics = reporter.get_metrics().await;
        assert_eq!(metrics.total_posts, 0);
        assert_eq!(metrics.total_likes, 0);
        assert_eq!(metrics.avg_engagement, 0.0);
    }

    #[tokio::test]
    async fn posts_page_newest_first_with_has_more() {
        let posts = Arc::new(InMemoryPostLog::new());
        seed_three(&posts).await;
        let reporter = reporter_with(posts, Arc::new(ActiveJobs::new()));

        let page = reporter.get_posts(1, 0).await;
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].id, "b"); // most recent timestamp
        assert_eq!(page.total, 3);
        assert!(page.has_more);

        let last = reporter.get_posts(2, 2).await;
        assert_eq!(last.posts.len(), 1);
        assert_eq!(last.posts[0].id, "a");
        assert!(!last.has_more);
    }

    #[tokio::test]
    async fn offset_past_end_returns_empty_page() {
        let posts = Arc::new(InMemoryPostLog::new());
        seed_three(&posts).await;
        let reporter = reporter_with(posts, Arc::new(ActiveJobs::new()));

        let page = reporter.get_posts(10, 50).await;
        assert!(page.posts.is_empty());
        assert_eq!(page.total, 3);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn status_merges_live_active_count() {
        let active = Arc::new(ActiveJobs::new());
        let reporter = reporter_with(Arc::new(InMemoryPostLog::new()), active.clone());

        let status = reporter.get_status().await;
        assert!(!status.running);
        assert_eq!(status.active_jobs, 0);

        active.register("posting-1");
        let status = reporter.get_status().await;
        assert!(status.running);
        assert_eq!(status.active_jobs, 1);
    }
}
