//! Save/Load for player progression.
//!
//! This crate provides:
//! - the [`SaveStorage`] key-value abstraction with file and in-memory backends
//! - JSON (de)serialisation of the persisted subset of the snapshot
//! - shallow merging of a loaded save over defaults
//!
//! Every storage fault is logged and swallowed here. Callers only ever see
//! "no saved data" or a skipped save.

mod progress;
mod storage;

pub use {progress::*, storage::*};

use {
    bevy::log::{debug, error, info, warn},
    chrono::Local,
    game_state_resources::GameSnapshot,
    std::path::PathBuf,
};

/// Where progress is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConfig {
    /// Directory used by [`FileStorage`]
    pub directory: PathBuf,
    /// The single storage key holding the save
    pub key: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("saves"),
            key: "soul_progress".to_string(),
        }
    }
}

impl SaveConfig {
    pub fn file_storage(&self) -> FileStorage {
        FileStorage::new(&self.directory)
    }
}

/// Reads saved progress. `None` when absent, unreadable or corrupt.
///
/// Corrupt content is copied to `<key>.corrupt-<timestamp>` before giving
/// up so the next save does not destroy it.
pub fn load(storage: &dyn SaveStorage, key: &str) -> Option<SavedProgress> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key = %key, "No saved progress found");
            return None;
        }
        Err(e) => {
            error!("Failed to read saved progress: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<SavedProgress>(&raw) {
        Ok(progress) => {
            info!(key = %key, "Loaded saved progress");
            Some(progress)
        }
        Err(e) => {
            warn!("Saved progress '{}' is corrupt, starting fresh: {}", key, e);
            quarantine(storage, key, &raw);
            None
        }
    }
}

fn quarantine(storage: &dyn SaveStorage, key: &str, raw: &str) {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let backup_key = format!("{key}.corrupt-{timestamp}");
    match storage.write(&backup_key, raw) {
        Ok(()) => info!(backup = %backup_key, "Kept corrupt save for inspection"),
        Err(e) => error!("Failed to back up corrupt save: {}", e),
    }
}

/// Writes the persisted subset of `snapshot`. Failures are logged only.
pub fn save(storage: &dyn SaveStorage, key: &str, snapshot: &GameSnapshot) {
    let serialized = match serde_json::to_string_pretty(&SavedProgress::from(snapshot)) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to serialize progress: {}", e);
            return;
        }
    };

    match storage.write(key, &serialized) {
        Ok(()) => debug!(key = %key, souls = snapshot.progression.souls, "Progress saved"),
        Err(e) => error!("Failed to write progress: {}", e),
    }
}

/// Deletes saved progress. Failures are logged only.
pub fn clear(storage: &dyn SaveStorage, key: &str) {
    match storage.remove(key) {
        Ok(()) => info!(key = %key, "Saved progress cleared"),
        Err(e) => error!("Failed to clear saved progress: {}", e),
    }
}
