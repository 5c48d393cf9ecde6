//! Board command implementation

use anyhow::{Context, Result};
use std::path::Path;

use streakboard::config::Config;
use streakboard::Leaderboard;

/// Print the ranked leaderboard for a snapshot
pub fn board_command(
    config: &Config,
    snapshot_path: &Path,
    now: Option<&str>,
    json: bool,
) -> Result<()> {
    let now = super::resolve_now(now)?;
    let snapshot = super::load_snapshot(config, snapshot_path)?;
    let board = snapshot.leaderboard(now);

    if json {
        let out = serde_json::to_string_pretty(&board).context("Failed to serialize leaderboard")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}\n", snapshot.challenge.headline(now));

    if board.is_empty() {
        println!("No participants.");
        return Ok(());
    }

    print!("{}", render_table(&board, config));

    if board.is_completed() {
        println!();
        for (place, entry) in board.podium(config.settings.podium_size).iter().enumerate() {
            println!("  {} {}", medal(place + 1), entry.participant.display_name());
        }
    }

    Ok(())
}

fn render_table(board: &Leaderboard, config: &Config) -> String {
    let name_width = board
        .entries
        .iter()
        .map(|e| e.participant.display_name().chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = format!(
        "  {:>4}  {:<name_width$}  {:>5}  {:>7}  {:>4}  {:>5}\n",
        "#", "Name", "Today", "Current", "Best", "Total"
    );
    for (rank, entry) in board.ranked() {
        out.push_str(&format!(
            "  {:>4}  {:<name_width$}  {:>5}  {:>7}  {:>4}  {:>5}\n",
            rank,
            entry.participant.display_name(),
            if entry.current_streak_includes_today() { "yes" } else { "-" },
            entry.current_streak_length(),
            entry.best_streak_length(),
            entry.total_completions(),
        ));
        if config.settings.show_timeline {
            out.push_str(&format!(
                "        {}\n",
                render_timeline(entry.timeline(), &config.settings.streak_glyph)
            ));
        }
    }
    out
}

/// One glyph per day: the streak glyph for completed days, `.` for misses
fn render_timeline(timeline: &[u32], glyph: &str) -> String {
    timeline
        .iter()
        .map(|&v| if v > 0 { glyph } else { "." })
        .collect()
}

fn medal(place: usize) -> String {
    match place {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}
