//! Snapshot files
//!
//! A snapshot is a JSON export of one challenge with its participants and
//! pending invites, as handed over by the data layer:
//!
//! ```json
//! {
//!   "challenge": { "name": "Reading", "start_date": "2023-07-01T00:00:00Z", "day_count": 30 },
//!   "participants": [ { "id": "p1", "name": "Ada", "completed_days": [0, 1, 2] } ],
//!   "invites": []
//! }
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Challenge, Invite, Participant};
use crate::error::SnapshotError;
use crate::fs_util;
use crate::leaderboard::Leaderboard;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub challenge: Challenge,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub invites: Vec<Invite>,
}

impl Snapshot {
    pub fn new(challenge: Challenge, participants: Vec<Participant>) -> Self {
        Self {
            challenge,
            participants,
            invites: Vec::new(),
        }
    }

    /// Parse a snapshot from JSON text
    pub fn from_json(content: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(content)?;
        snapshot
            .challenge
            .validate()
            .map_err(SnapshotError::InvalidChallenge)?;
        Ok(snapshot)
    }

    /// Load a snapshot file.
    ///
    /// With `normalize` set, unsorted or duplicated completed days are
    /// repaired and logged. Offsets past the end of the challenge are
    /// rejected either way.
    pub fn load(path: &Path, normalize: bool) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| io_error(path, source))?;
        let mut snapshot = Self::from_json(&content)?;

        if normalize {
            snapshot.normalize();
        }
        snapshot.validate()?;

        debug!(
            path = %path.display(),
            participants = snapshot.participants.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty-printed JSON.
    ///
    /// Takes an exclusive lock on `<path>.lock` and replaces the file through
    /// a synced temp file, so readers never see a partial write.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let _lock = fs_util::lock_exclusive(path).map_err(|source| io_error(path, source))?;
        self.write_unlocked(path)
    }

    /// Load, modify and save a snapshot while holding its lock.
    ///
    /// Concurrent updates to the same file are serialized; the closure's
    /// result is returned once the new contents are on disk.
    pub fn update<T>(
        path: &Path,
        normalize: bool,
        f: impl FnOnce(&mut Snapshot) -> Result<T, SnapshotError>,
    ) -> Result<T, SnapshotError> {
        let _lock = fs_util::lock_exclusive(path).map_err(|source| io_error(path, source))?;
        let mut snapshot = Self::load(path, normalize)?;
        let result = f(&mut snapshot)?;
        snapshot.write_unlocked(path)?;
        Ok(result)
    }

    fn write_unlocked(&self, path: &Path) -> Result<(), SnapshotError> {
        let content = serde_json::to_string_pretty(self)?;
        fs_util::write_atomic(path, content.as_bytes()).map_err(|source| io_error(path, source))
    }

    /// Check every participant's completed days
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for participant in &self.participants {
            participant
                .validate(self.challenge.day_count)
                .map_err(|source| SnapshotError::InvalidParticipant {
                    participant: participant.id.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Sort and de-duplicate every participant's completed days.
    /// Returns the number of participants that needed fixing.
    pub fn normalize(&mut self) -> usize {
        let mut fixed = 0;
        for participant in &mut self.participants {
            if participant.normalize() {
                warn!(participant = %participant.id, "completed days were unsorted or duplicated");
                fixed += 1;
            }
        }
        fixed
    }

    pub fn participant_mut(&mut self, id: &str) -> Result<&mut Participant, SnapshotError> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SnapshotError::UnknownParticipant(id.to_string()))
    }

    /// Invites that can still be accepted at `now`
    pub fn open_invites(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Invite> {
        self.invites.iter().filter(move |i| !i.is_expired(now))
    }

    pub fn leaderboard(&self, now: DateTime<Utc>) -> Leaderboard {
        Leaderboard::build(&self.challenge, &self.participants, now)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SnapshotError {
    SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "challenge": { "id": "c1", "name": "Reading", "start_date": "2023-07-01T00:00:00Z", "day_count": 5 },
        "participants": [
            { "id": "p1", "name": "Ada", "completed_days": [3, 1, 1] },
            { "id": "p2", "name": "Bo", "completed_days": [0, 1] }
        ]
    }"#;

    #[test]
    fn test_from_json_defaults_invites() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.participants.len(), 2);
        assert!(snapshot.invites.is_empty());
    }

    #[test]
    fn test_validate_names_offending_participant() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        match snapshot.validate() {
            Err(SnapshotError::InvalidParticipant { participant, .. }) => {
                assert_eq!(participant, "p1")
            }
            other => panic!("expected InvalidParticipant, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_counts_fixed_participants() {
        let mut snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.normalize(), 1);
        assert_eq!(snapshot.participants[0].completed_days, vec![1, 3]);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_zero_day_challenge_rejected() {
        let json = r#"{ "challenge": { "start_date": "2023-07-01T00:00:00Z", "day_count": 0 } }"#;
        assert!(matches!(
            Snapshot::from_json(json),
            Err(SnapshotError::InvalidChallenge(_))
        ));
    }

    #[test]
    fn test_unknown_participant() {
        let mut snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        assert!(snapshot.participant_mut("p2").is_ok());
        assert!(matches!(
            snapshot.participant_mut("nobody"),
            Err(SnapshotError::UnknownParticipant(_))
        ));
    }
}
