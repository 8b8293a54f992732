//! Posting cadence policy
//!
//! Pure functions; the runner owns the actual sleeping.

use crate::domain::{JobSettings, PostingHours};
use std::time::Duration;

/// Hard rate limit: a posting loop never ticks more often than this,
/// regardless of configured post volume.
pub const POSTING_INTERVAL_FLOOR_MINUTES: u64 = 30;

/// Fixed cadence of the reply-monitoring loop.
pub const REPLY_CHECK_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Interval between publish cycles: the active window spread evenly over
/// `postsPerDay`, floored at 30 minutes.
pub fn posting_interval(settings: &JobSettings) -> Duration {
    let active_hours = settings
        .posting_hours
        .end
        .saturating_sub(settings.posting_hours.start) as u64;
    let posts_per_day = settings.posts_per_day.max(1) as u64;
    let minutes = (active_hours * 60 / posts_per_day).max(POSTING_INTERVAL_FLOOR_MINUTES);
    Duration::from_secs(minutes * 60)
}

/// Whether `hour` falls within the `[start, end)` posting window
pub fn in_active_window(hour: u32, hours: &PostingHours) -> bool {
    hours.start <= hour && hour < hours.end
}
