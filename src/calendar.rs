//! Challenge clock
//!
//! Maps a challenge's start instant and duration onto a 1-based day index.
//! Day 1 begins the moment after `start_date`; the index advances once per
//! full day elapsed and is clamped to `day_count` after the challenge ends.
//!
//! Every function takes `now` explicitly; nothing in this module reads the
//! system clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Lifecycle of a challenge relative to a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeStatus {
    /// `now` is at or before the start instant
    NotStarted,
    /// Somewhere between day 1 and the end of the last day
    InProgress,
    /// The last day has fully elapsed
    Completed,
}

impl ChallengeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whole days between `start` and `now`, rounded toward negative infinity.
///
/// Negative when `now` precedes `start`.
pub fn elapsed_full_days(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Current 1-based day index in `[0, day_count]`.
///
/// The start instant itself is day 0, any later moment within the first 24h
/// is day 1, and from then on the index is `elapsed_full_days + 1`.
pub fn current_day_index(start: DateTime<Utc>, day_count: u32, now: DateTime<Utc>) -> u32 {
    let elapsed = elapsed_full_days(start, now);

    if elapsed >= i64::from(day_count) {
        return day_count;
    }
    if elapsed >= 1 {
        // elapsed < day_count here, so the cast cannot truncate
        return elapsed as u32 + 1;
    }
    if now > start { 1 } else { 0 }
}

/// Instant at which the last day of the challenge ends.
pub fn end_date(start: DateTime<Utc>, day_count: u32) -> DateTime<Utc> {
    start + Duration::days(i64::from(day_count))
}

/// True once `now` is strictly past the end of the last day.
pub fn is_completed(start: DateTime<Utc>, day_count: u32, now: DateTime<Utc>) -> bool {
    now > end_date(start, day_count)
}

/// Derive the lifecycle status for `now`.
pub fn status(start: DateTime<Utc>, day_count: u32, now: DateTime<Utc>) -> ChallengeStatus {
    if is_completed(start, day_count, now) {
        ChallengeStatus::Completed
    } else if current_day_index(start, day_count, now) == 0 {
        ChallengeStatus::NotStarted
    } else {
        ChallengeStatus::InProgress
    }
}

/// Parse a user supplied instant.
///
/// Accepts RFC 3339 (`2023-07-01T00:00:00Z`) or a naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DD` which is read as UTC.
pub fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
