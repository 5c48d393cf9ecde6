//! Day command implementation

use anyhow::Result;
use std::path::Path;

use streakboard::config::Config;

/// Show the current day index and status of a challenge
pub fn day_command(config: &Config, snapshot_path: &Path, now: Option<&str>) -> Result<()> {
    let now = super::resolve_now(now)?;
    let snapshot = super::load_snapshot(config, snapshot_path)?;
    let challenge = &snapshot.challenge;

    println!("{}", challenge.headline(now));
    println!("  Status:  {}", challenge.status(now).label());
    println!(
        "  Runs:    {} -> {}",
        challenge.start_date.format("%Y-%m-%d %H:%M"),
        challenge.end_date().format("%Y-%m-%d %H:%M")
    );

    let open = snapshot.open_invites(now).count();
    if open > 0 {
        println!("  Invites: {} open", open);
    }

    Ok(())
}
