//! Shared helpers for CLI commands.
//!
//! The CLI is the only place the wall clock is read; every core call gets
//! an explicit date, so `--today` can override it for scripting and tests.

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lifeasify_core::{AppStore, Snapshot};

/// Resolve the evaluation date: the `--today` override if given, the
/// local calendar date otherwise.
pub fn resolve_today(flag: Option<NaiveDate>) -> NaiveDate {
    flag.unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Load the store from the snapshot file, along with the path to save it
/// back to. A missing file yields an empty store.
pub fn load_store() -> Result<(AppStore, PathBuf), Box<dyn Error>> {
    let path = Snapshot::default_path()?;
    let snapshot = Snapshot::load(&path)?;
    Ok((snapshot.into_store(), path))
}

/// Persist the store back to the snapshot file.
pub fn save_store(store: &AppStore, path: &Path) -> Result<(), Box<dyn Error>> {
    Snapshot::from_store(store).save(path)?;
    Ok(())
}
