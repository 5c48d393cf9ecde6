//! CLI command implementations

pub mod board;
pub mod day;
pub mod init;
pub mod toggle;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

use streakboard::calendar;
use streakboard::config::Config;
use streakboard::Snapshot;

/// Resolve the `--now` flag, defaulting to the current time
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(raw) => calendar::parse_instant(raw)
            .with_context(|| format!("Invalid --now value: {raw}")),
        None => Ok(Utc::now()),
    }
}

/// Load a snapshot honoring the configured normalization policy
pub fn load_snapshot(config: &Config, path: &Path) -> Result<Snapshot> {
    Snapshot::load(path, config.settings.normalize_completed_days)
        .with_context(|| format!("Failed to load snapshot: {}", path.display()))
}
