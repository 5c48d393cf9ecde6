//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::leaderboard::DEFAULT_PODIUM_SIZE;

/// General settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Sort and de-duplicate completed days when loading a snapshot.
    /// When false, malformed day lists are rejected instead.
    #[serde(default = "default_normalize_completed_days")]
    pub normalize_completed_days: bool,

    /// Number of places shown once a challenge is completed
    #[serde(default = "default_podium_size")]
    pub podium_size: usize,

    /// Print each participant's day-by-day timeline under the board
    #[serde(default = "default_show_timeline")]
    pub show_timeline: bool,

    /// Glyph used for a completed day in printed timelines
    #[serde(default = "default_streak_glyph")]
    pub streak_glyph: String,
}

fn default_normalize_completed_days() -> bool {
    true
}

fn default_podium_size() -> usize {
    DEFAULT_PODIUM_SIZE
}

fn default_show_timeline() -> bool {
    true
}

fn default_streak_glyph() -> String {
    "#".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            normalize_completed_days: default_normalize_completed_days(),
            podium_size: default_podium_size(),
            show_timeline: default_show_timeline(),
            streak_glyph: default_streak_glyph(),
        }
    }
}
