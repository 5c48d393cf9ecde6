//! Leaderboard construction and ranking
//!
//! Builds one [`LeaderboardEntry`] per participant and orders them with
//! [`LeaderboardEntry::compare`]. The sort is stable, so participants that
//! tie on every metric keep their input order.
//!
//! # Usage
//!
//! ```ignore
//! let board = Leaderboard::build(&challenge, &participants, Utc::now());
//! for (rank, entry) in board.ranked() {
//!     println!("{rank}. {}", entry.participant.display_name());
//! }
//! ```

mod entry;
mod streak;

pub use entry::{LeaderboardEntry, Progress};
pub use streak::{StreakSummary, summarize};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::calendar::ChallengeStatus;
use crate::domain::{Challenge, Participant};

/// Default number of places shown on the podium
pub const DEFAULT_PODIUM_SIZE: usize = 3;

/// Ranked entries for one challenge at one instant
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub challenge: Challenge,
    pub day_index: u32,
    pub status: ChallengeStatus,
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Compute and rank entries for every participant as of `now`
    pub fn build(challenge: &Challenge, participants: &[Participant], now: DateTime<Utc>) -> Self {
        let day_index = challenge.current_day_index(now);
        let status = challenge.status(now);

        let mut entries: Vec<LeaderboardEntry> = participants
            .iter()
            .map(|p| LeaderboardEntry::at_day(p, challenge, day_index))
            .collect();
        entries.sort_by(LeaderboardEntry::compare);

        tracing::debug!(
            challenge = %challenge.id,
            day_index,
            %status,
            participants = entries.len(),
            "built leaderboard"
        );

        Self {
            challenge: challenge.clone(),
            day_index,
            status,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their 1-based rank
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &LeaderboardEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Top `size` entries
    pub fn podium(&self, size: usize) -> &[LeaderboardEntry] {
        &self.entries[..size.min(self.entries.len())]
    }

    /// 1-based rank of a participant, if present
    pub fn rank_of(&self, participant_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.participant.id == participant_id)
            .map(|i| i + 1)
    }

    pub fn is_completed(&self) -> bool {
        self.status == ChallengeStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn challenge() -> Challenge {
        Challenge::new("test", Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap(), 5)
    }

    #[test]
    fn test_stable_order_for_full_ties() {
        let now = Utc.with_ymd_and_hms(2023, 7, 4, 3, 14, 39).unwrap();
        let participants = vec![
            Participant::new("a", "A", vec![0]),
            Participant::new("b", "B", vec![0]),
            Participant::new("c", "C", vec![0]),
        ];
        let board = Leaderboard::build(&challenge(), &participants, now);
        let ids: Vec<_> = board.entries.iter().map(|e| e.participant.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_podium_and_rank() {
        let now = Utc.with_ymd_and_hms(2023, 7, 4, 3, 14, 39).unwrap();
        let participants = vec![
            Participant::new("low", "Low", vec![]),
            Participant::new("top", "Top", vec![1, 2, 3, 4]),
        ];
        let board = Leaderboard::build(&challenge(), &participants, now);

        assert_eq!(board.day_index, 4);
        assert_eq!(board.rank_of("top"), Some(1));
        assert_eq!(board.rank_of("low"), Some(2));
        assert_eq!(board.rank_of("missing"), None);
        assert_eq!(board.podium(DEFAULT_PODIUM_SIZE).len(), 2);
        assert_eq!(board.podium(1)[0].participant.id, "top");
        assert!(!board.is_completed());
    }

    #[test]
    fn test_empty_board() {
        let now = Utc.with_ymd_and_hms(2023, 8, 1, 0, 0, 0).unwrap();
        let board = Leaderboard::build(&challenge(), &[], now);
        assert!(board.is_empty());
        assert!(board.podium(3).is_empty());
        assert!(board.is_completed());
    }
}
