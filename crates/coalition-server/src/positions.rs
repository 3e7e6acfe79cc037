//! Position overrides saved across restarts.
//!
//! The file is a JSON object keyed by party name:
//!
//! ```json
//! { "VVD": { "economic": 0.7, "social": 0.3 } }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use coalition::Position;
use coalition_config::ConfigError;
use parking_lot::Mutex;

/// JSON file of per-party position overrides.
///
/// Snapshots are numbered by [`PositionStore::next_revision`] while the
/// caller still holds the state they were taken from. Writes may then run
/// off that lock; a snapshot older than the one on disk is skipped.
#[derive(Debug)]
pub struct PositionStore {
    path: PathBuf,
    revisions: AtomicU64,
    written: Mutex<u64>,
}

impl PositionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            revisions: AtomicU64::new(0),
            written: Mutex::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved overrides. A missing file holds none.
    pub fn load(&self) -> Result<BTreeMap<String, Position>, ConfigError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Replaces the file with `overrides`.
    pub fn save(&self, overrides: &BTreeMap<String, Position>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(overrides)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Numbers the next snapshot. Call while holding the state it copies.
    pub fn next_revision(&self) -> u64 {
        self.revisions.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Writes a numbered snapshot unless a newer one is already on disk.
    ///
    /// Returns whether the file was written.
    pub fn save_revision(
        &self,
        revision: u64,
        overrides: &BTreeMap<String, Position>,
    ) -> Result<bool, ConfigError> {
        let mut written = self.written.lock();
        if revision <= *written {
            return Ok(false);
        }
        self.save(overrides)?;
        *written = revision;
        Ok(true)
    }
}
