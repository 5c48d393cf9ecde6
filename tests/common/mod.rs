//! Shared fixtures for streakboard integration tests

#![allow(dead_code)]

use chrono::{DateTime, NaiveDateTime, Utc};
use streakboard::{Challenge, Participant};

/// Parse a "YYYY-MM-DD HH:MM:SS" instant as UTC
pub fn at(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .expect("Failed to parse test instant")
        .and_utc()
}

/// Challenge starting 2023-07-01 00:00:00 with the given length
pub fn july_challenge(day_count: u32) -> Challenge {
    let mut challenge = Challenge::new("test", at("2023-07-01 00:00:00"), day_count);
    challenge.id = "1".to_string();
    challenge.owner_id = "1".to_string();
    challenge
}

pub fn participant(id: &str, completed_days: &[u32]) -> Participant {
    let mut p = Participant::new(id, "test", completed_days.to_vec());
    p.user_id = id.to_string();
    p.challenge_id = "1".to_string();
    p
}
