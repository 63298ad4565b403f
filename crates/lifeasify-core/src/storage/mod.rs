//! Configuration and snapshot storage.

mod config;
mod snapshot;

pub use config::{Config, ProjectionConfig};
pub use snapshot::Snapshot;

use std::path::PathBuf;

/// Returns `~/.config/lifeasify[-dev]/` based on LIFEASIFY_ENV.
///
/// Set LIFEASIFY_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIFEASIFY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lifeasify-dev")
    } else {
        base_dir.join("lifeasify")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
