// Job Domain Model

use serde::{Deserialize, Serialize};

/// Job ID: `{kind}-{epoch_millis}` (single-process uniqueness)
pub type JobId = String;

/// Job kind: what recurring work the job performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobKind {
    #[serde(rename = "posting")]
    Posting,
    #[serde(rename = "reply-monitoring")]
    ReplyMonitoring,
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobKind::Posting => write!(f, "posting"),
            JobKind::ReplyMonitoring => write!(f, "reply-monitoring"),
        }
    }
}

impl std::str::FromStr for JobKind {
    type Err = crate::domain::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "posting" => Ok(JobKind::Posting),
            "reply-monitoring" => Ok(JobKind::ReplyMonitoring),
            other => Err(crate::domain::DomainError::UnknownJobKind(
                other.to_string(),
            )),
        }
    }
}

/// Job lifecycle state
///
/// `stopped` and `paused` differ only in label: `start` is the only way back
/// to `running` from either state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Stopped,
    Running,
    Paused,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Stopped => write!(f, "stopped"),
            JobStatus::Running => write!(f, "running"),
            JobStatus::Paused => write!(f, "paused"),
        }
    }
}

/// Hour-of-day window for the posting loop, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingHours {
    pub start: u32,
    pub end: u32,
}

impl Default for PostingHours {
    fn default() -> Self {
        Self { start: 9, end: 21 }
    }
}

fn default_posts_per_day() -> u32 {
    12
}

fn default_max_replies_per_hour() -> u32 {
    10
}

fn default_keywords() -> Vec<String> {
    vec!["Pokemon".to_string(), "TCG".to_string()]
}

/// Per-job configuration
///
/// Each kind recognizes its own options; unrecognized keys are preserved
/// round-trip through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSettings {
    #[serde(default = "default_posts_per_day")]
    pub posts_per_day: u32,

    #[serde(default)]
    pub posting_hours: PostingHours,

    #[serde(default = "default_max_replies_per_hour")]
    pub max_replies_per_hour: u32,

    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            posts_per_day: default_posts_per_day(),
            posting_hours: PostingHours::default(),
            max_replies_per_hour: default_max_replies_per_hour(),
            keywords: default_keywords(),
            extra: serde_json::Map::new(),
        }
    }
}

fn default_success_rate() -> u32 {
    100
}

/// Per-job counters
///
/// `postsToday`/`repliesToday` accumulate indefinitely; there is no daily
/// reset. `successRate` is a clamp-to-100 passthrough, never a computed
/// ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub posts_today: u32,
    pub replies_today: u32,
    #[serde(default = "default_success_rate")]
    pub success_rate: u32,
}

impl Default for JobStats {
    fn default() -> Self {
        Self {
            posts_today: 0,
            replies_today: 0,
            success_rate: 100,
        }
    }
}

/// Outcome of one unit of loop work, fed into the stats update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    PostSuccess,
    PostFailure,
    ReplySuccess,
}

impl JobStats {
    /// Apply one stats event: bump the relevant counter and re-clamp
    /// `successRate` at 100.
    pub fn apply(&mut self, event: StatsEvent) {
        match event {
            StatsEvent::PostSuccess => self.posts_today += 1,
            StatsEvent::ReplySuccess => self.replies_today += 1,
            StatsEvent::PostFailure => {}
        }
        self.success_rate = self.success_rate.min(100);
    }
}

/// Job Entity
///
/// Owned exclusively by the job store. Execution loops hold only the id and
/// re-read the record before every stats write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    #[serde(rename = "type")]
    pub kind: JobKind,
    pub status: JobStatus,
    pub settings: JobSettings,

    pub created_at: i64, // epoch ms, immutable
    pub last_run: Option<i64>,
    pub next_run: Option<i64>, // reserved scheduling hint

    pub stats: JobStats,
}

impl Job {
    /// Create a new Job in the `stopped` state
    ///
    /// # Arguments
    ///
    /// * `id` - Unique job ID (injected, not generated)
    /// * `kind` - Job kind
    /// * `settings` - Per-job configuration
    /// * `created_at` - Creation timestamp in epoch ms (injected)
    pub fn new(id: impl Into<String>, kind: JobKind, settings: JobSettings, created_at: i64) -> Self {
        Self {
            id: id.into(),
            kind,
            status: JobStatus::Stopped,
            settings,
            created_at,
            last_run: None,
            next_run: None,
            stats: JobStats::default(),
        }
    }
}
