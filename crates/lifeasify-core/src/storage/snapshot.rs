//! JSON snapshot of the application store.
//!
//! The original client dumped its record lists to a single JSON file; the
//! CLI keeps that shape at `~/.config/lifeasify/lifeasify.json`. This is a
//! plain dump-and-reload of the record lists, not a database.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::chore::Chore;
use crate::contact::Contact;
use crate::error::SnapshotError;
use crate::store::AppStore;

const SNAPSHOT_FILE: &str = "lifeasify.json";

/// Persisted record lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub chores: Vec<Chore>,
    #[serde(default)]
    pub chore_history: Vec<Chore>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Snapshot {
    /// Path of the snapshot file inside the data directory.
    pub fn default_path() -> std::io::Result<PathBuf> {
        Ok(data_dir()?.join(SNAPSHOT_FILE))
    }

    /// Load a snapshot; a missing file is an empty snapshot, not an error.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        if !path.exists() {
            return Ok(Snapshot::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| SnapshotError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| SnapshotError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let raw = serde_json::to_string_pretty(self).map_err(|e| SnapshotError::WriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| SnapshotError::WriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Capture the store's current record lists.
    pub fn from_store(store: &AppStore) -> Self {
        Snapshot {
            chores: store.chores().to_vec(),
            chore_history: store.chore_history().to_vec(),
            contacts: store.contacts().to_vec(),
        }
    }

    /// Rebuild a store from the persisted lists.
    pub fn into_store(self) -> AppStore {
        AppStore::from_parts(self.chores, self.chore_history, self.contacts)
    }
}
