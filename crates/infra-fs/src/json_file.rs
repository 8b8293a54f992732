// Whole-file JSON helpers with silent corruption recovery

use engager_core::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Read and parse a whole JSON file, substituting `Default` when the file
/// is missing, unreadable, or malformed. Bad data is discarded, not
/// surfaced.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "Backing file unreadable; using default");
            }
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Backing file corrupt; using default");
            T::default()
        }
    }
}

/// Rewrite a whole JSON file
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the seed value only if the file does not exist yet
pub fn init_if_missing<T: Serialize>(path: &Path, seed: &T) -> Result<()> {
    if !path.exists() {
        save(path, seed)?;
    }
    Ok(())
}
