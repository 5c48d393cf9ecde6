//! Leaderboard entries and the ranking comparator

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::streak::{self, StreakSummary};
use crate::domain::{Challenge, Participant};

/// Minimum number of points a completion chart needs to draw a line
const MIN_CHART_POINTS: usize = 2;

/// One participant's row on a challenge leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub participant: Participant,
    #[serde(skip)]
    pub challenge: Challenge,
    /// Challenge day index the metrics were computed for
    pub day_index: u32,
    #[serde(flatten)]
    pub streak: StreakSummary,
}

/// Completion ratios relative to the current day index, each in `[0, 1]`
/// for well-formed input
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Progress {
    pub current: f64,
    pub best: f64,
    pub total: f64,
}

impl LeaderboardEntry {
    /// Build the entry for `participant` as of `now`
    pub fn new(participant: &Participant, challenge: &Challenge, now: DateTime<Utc>) -> Self {
        Self::at_day(participant, challenge, challenge.current_day_index(now))
    }

    /// Build the entry for an already computed day index
    pub fn at_day(participant: &Participant, challenge: &Challenge, day_index: u32) -> Self {
        let streak = streak::summarize(&participant.completed_days, day_index);
        tracing::trace!(
            participant = %participant.id,
            day_index,
            current = streak.current_streak,
            best = streak.best_streak,
            "computed streak"
        );

        Self {
            participant: participant.clone(),
            challenge: challenge.clone(),
            day_index,
            streak,
        }
    }

    pub fn timeline(&self) -> &[u32] {
        &self.streak.timeline
    }

    pub fn current_streak_length(&self) -> u32 {
        self.streak.current_streak
    }

    pub fn current_streak_includes_today(&self) -> bool {
        self.streak.includes_today
    }

    pub fn best_streak_length(&self) -> u32 {
        self.streak.best_streak
    }

    pub fn total_completions(&self) -> u32 {
        self.streak.total_completions
    }

    /// Ranking order: better entries sort first.
    ///
    /// Streaks including today beat those that don't, then longer current
    /// streak, then longer best streak, then more completions.
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        b.streak
            .includes_today
            .cmp(&a.streak.includes_today)
            .then_with(|| b.streak.current_streak.cmp(&a.streak.current_streak))
            .then_with(|| b.streak.best_streak.cmp(&a.streak.best_streak))
            .then_with(|| b.streak.total_completions.cmp(&a.streak.total_completions))
    }

    /// Timeline padded with zeros so it can always be drawn as a line
    pub fn chart_points(&self) -> Vec<u32> {
        let mut points = self.streak.timeline.clone();
        if points.len() < MIN_CHART_POINTS {
            points.resize(MIN_CHART_POINTS, 0);
        }
        points
    }

    pub fn progress(&self) -> Progress {
        if self.day_index == 0 {
            return Progress::default();
        }
        let days = f64::from(self.day_index);
        let current = if self.streak.includes_today {
            f64::from(self.streak.current_streak) / days
        } else {
            0.0
        };
        Progress {
            current,
            best: f64::from(self.streak.best_streak) / days,
            total: f64::from(self.streak.total_completions) / days,
        }
    }
}
