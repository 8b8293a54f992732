// Persisted bot status object

use crate::domain::JobStats;
use serde::{Deserialize, Serialize};

/// Status object persisted to the status file
///
/// Written once with canned defaults on first run. The reporter merges this
/// with the live active-loop count; an unreadable file degrades to
/// `Default`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct PersistedStatus {
    pub running: bool,
    pub uptime: Option<String>,
    pub last_run: Option<i64>,
    pub stats: JobStats,
}
