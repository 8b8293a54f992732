//! Flat-file storage adapters
//!
//! Every store is whole-file read-modify-write over a shared data
//! directory. Reads are `load_or_default`: a missing or corrupt backing
//! file is logged and treated as empty, never surfaced. No cross-writer
//! locking; single-process deployment is assumed.

mod job_store;
mod json_file;
mod post_log;
mod settings_store;
mod status_store;

pub use job_store::JsonJobStore;
pub use post_log::JsonlPostLog;
pub use settings_store::JsonSettingsStore;
pub use status_store::JsonStatusStore;

use std::path::{Path, PathBuf};

pub const JOBS_FILE: &str = "bot_jobs.json";
pub const STATUS_FILE: &str = "bot_status.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const POSTS_FILE: &str = "posts.jsonl";

/// Create the data directory if needed and return the resolved path
pub fn ensure_data_dir(dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
    let dir = dir.as_ref().to_path_buf();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
