//! Toggle command implementation

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use streakboard::config::Config;
use streakboard::{ChallengeStatus, Snapshot, SnapshotError};

/// Flip today's completion marker for one participant and save the snapshot
pub fn toggle_command(
    config: &Config,
    snapshot_path: &Path,
    participant_id: &str,
    now: Option<&str>,
) -> Result<()> {
    let now = super::resolve_now(now)?;

    let (name, day_index, completed) = Snapshot::update(
        snapshot_path,
        config.settings.normalize_completed_days,
        |snapshot| {
            let status = snapshot.challenge.status(now);
            if status != ChallengeStatus::InProgress {
                return Err(SnapshotError::NotInProgress(status));
            }

            let day_index = snapshot.challenge.current_day_index(now);
            let participant = snapshot.participant_mut(participant_id)?;
            let completed = participant.toggle_today(day_index);
            Ok((participant.display_name().to_string(), day_index, completed))
        },
    )
    .with_context(|| format!("Failed to update snapshot: {}", snapshot_path.display()))?;

    info!(participant = participant_id, day_index, completed, "toggled completion");
    println!(
        "{}: day #{} {}",
        name,
        day_index,
        if completed { "completed" } else { "not completed" }
    );

    Ok(())
}
