//! Challenge record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{self, ChallengeStatus};
use crate::error::InputError;

/// A multi-day challenge as stored by the data layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub name: String,
    /// Start instant, normalized to midnight by whoever created the challenge
    pub start_date: DateTime<Utc>,
    /// Total number of days in the challenge
    pub day_count: u32,
    /// User ids enrolled in the challenge
    #[serde(default)]
    pub users: Vec<String>,
}

impl Challenge {
    pub fn new(name: impl Into<String>, start_date: DateTime<Utc>, day_count: u32) -> Self {
        Self {
            id: String::new(),
            owner_id: String::new(),
            name: name.into(),
            start_date,
            day_count,
            users: Vec::new(),
        }
    }

    /// 1-based day index at `now`, clamped to `[0, day_count]`
    pub fn current_day_index(&self, now: DateTime<Utc>) -> u32 {
        calendar::current_day_index(self.start_date, self.day_count, now)
    }

    /// True once the last day has fully elapsed
    pub fn is_completed(&self, now: DateTime<Utc>) -> bool {
        calendar::is_completed(self.start_date, self.day_count, now)
    }

    pub fn status(&self, now: DateTime<Utc>) -> ChallengeStatus {
        calendar::status(self.start_date, self.day_count, now)
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        calendar::end_date(self.start_date, self.day_count)
    }

    /// Header line shown above a leaderboard, e.g. `"Reading: Day #3 of 30"`
    pub fn headline(&self, now: DateTime<Utc>) -> String {
        let mut line = format!(
            "{}: Day #{} of {}",
            self.name,
            self.current_day_index(now),
            self.day_count
        );
        if self.is_completed(now) {
            line.push_str(" (completed)");
        }
        line
    }

    /// Check the record-level invariants the clock relies on
    pub fn validate(&self) -> Result<(), InputError> {
        if self.day_count == 0 {
            return Err(InputError::EmptyChallenge);
        }
        Ok(())
    }
}
