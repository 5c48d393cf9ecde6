//! streakboard - streaks and leaderboards for multi-day habit challenges
//!
//! Participants join a challenge that runs for a fixed number of days and mark
//! each day they complete. From the challenge's start date and each
//! participant's completed-day offsets, streakboard derives:
//!
//! - the current day index of the challenge (see [`calendar`])
//! - a per-day streak timeline for charting
//! - current streak (and whether it already covers today), best streak and
//!   total completions
//! - a ranked leaderboard (see [`leaderboard`])
//!
//! The engine is pure: callers pass `now` in explicitly and get plain data
//! back. Loading snapshots and configuration lives in [`snapshot`] and
//! [`config`].

pub mod calendar;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs_util;
pub mod leaderboard;
pub mod snapshot;

pub use calendar::ChallengeStatus;
pub use domain::*;
pub use error::{InputError, SnapshotError};
pub use leaderboard::{Leaderboard, LeaderboardEntry, StreakSummary};
pub use snapshot::Snapshot;
