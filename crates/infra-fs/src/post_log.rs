// Line-delimited JSON post log

use async_trait::async_trait;
use engager_core::domain::PostRecord;
use engager_core::port::PostLog;
use engager_core::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

/// Append-only publish log, one JSON record per line
///
/// Unparseable lines are skipped on read rather than failing the whole
/// log; a missing file reads as empty.
pub struct JsonlPostLog {
    path: PathBuf,
}

impl JsonlPostLog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(crate::POSTS_FILE),
        }
    }
}

#[async_trait]
impl PostLog for JsonlPostLog {
    async fn append(&self, record: &PostRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<PostRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Post log unreadable; treating as empty");
                return Ok(Vec::new());
            }
        };

        let mut records = Vec::new();
        for line in raw.lines().filter(|l| !l.trim().is_empty()) {
            match serde_json::from_str(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(error = %e, "Skipping malformed post log line"),
            }
        }
        Ok(records)
    }
}
