//! Error types for input validation and snapshot loading

use std::path::PathBuf;

use crate::calendar::ChallengeStatus;

/// Problems found in a participant's completed-day list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("day {day} appears more than once")]
    DuplicateDay { day: u32 },

    #[error("day {day} is listed after day {previous}")]
    OutOfOrder { previous: u32, day: u32 },

    #[error("day {day} is outside a {day_count}-day challenge")]
    BeyondChallenge { day: u32, day_count: u32 },

    #[error("challenge must last at least one day")]
    EmptyChallenge,
}

/// Error type for reading and writing snapshot files
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Participant {participant}: {source}")]
    InvalidParticipant {
        participant: String,
        #[source]
        source: InputError,
    },

    #[error("Invalid challenge: {0}")]
    InvalidChallenge(InputError),

    #[error("Participant {0} is not part of this snapshot")]
    UnknownParticipant(String),

    #[error("Challenge does not accept completions: {}", .0.label())]
    NotInProgress(ChallengeStatus),
}
