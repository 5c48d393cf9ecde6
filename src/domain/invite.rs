//! Challenge invitations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An invitation to join a challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    #[serde(default)]
    pub id: String,
    pub challenge_id: String,
    pub sender_id: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub expires: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Invite {
    /// An invite only expires when it is flagged as expiring and has a deadline
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match (self.expires, self.expires_at) {
            (true, Some(deadline)) => now > deadline,
            _ => false,
        }
    }
}
