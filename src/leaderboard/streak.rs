//! Streak computation
//!
//! Turns a participant's sparse list of completed day offsets into a dense
//! per-day timeline plus current/best streak metrics.

use serde::{Deserialize, Serialize};

/// Derived streak metrics for one participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Streak length ending at each day offset (0 = not completed)
    pub timeline: Vec<u32>,
    pub current_streak: u32,
    /// True when the current streak already contains the day in progress
    pub includes_today: bool,
    pub best_streak: u32,
    pub total_completions: u32,
}

/// Accumulator for the sparse-to-dense walk
#[derive(Debug, Default)]
struct Walk {
    timeline: Vec<u32>,
    cursor: u64,
    streak: u32,
    best: u32,
}

impl Walk {
    /// Record a missed day at the cursor
    fn miss(&mut self) {
        self.best = self.best.max(self.streak);
        self.streak = 0;
        self.timeline.push(0);
        self.cursor += 1;
    }

    /// Record a completed day at the cursor
    fn hit(&mut self) {
        self.streak += 1;
        self.best = self.best.max(self.streak);
        self.timeline.push(self.streak);
        self.cursor += 1;
    }

    fn step(mut self, day: u32) -> Self {
        while self.cursor < u64::from(day) {
            self.miss();
        }
        self.hit();
        self
    }
}

/// Compute the streak summary for `completed_days` at 1-based `day_index`.
///
/// The dense walk covers offsets `0..=day_index - 1`, extended to the last
/// completed offset when that lies further out. A last completion at
/// `day_index` counts as "today", one at `day_index - 1` as "yesterday";
/// anything older means the current streak is broken.
///
/// Input is assumed ascending and unique. Other input does not panic but
/// yields unspecified metrics.
pub fn summarize(completed_days: &[u32], day_index: u32) -> StreakSummary {
    let window_end = i64::from(day_index) - 1;

    let mut walk = completed_days
        .iter()
        .fold(Walk::default(), |walk, &day| walk.step(day));

    while (walk.cursor as i64) <= window_end {
        walk.miss();
    }
    let best_streak = walk.best.max(walk.streak);

    let last_value = walk.timeline.last().copied().unwrap_or(0);
    let (current_streak, includes_today) = match completed_days.last() {
        Some(&last) if i64::from(last) == window_end + 1 => (last_value, true),
        Some(&last) if i64::from(last) == window_end => (last_value, false),
        _ => (0, false),
    };

    StreakSummary {
        timeline: walk.timeline,
        current_streak,
        includes_today,
        best_streak,
        total_completions: completed_days.len() as u32,
    }
}
