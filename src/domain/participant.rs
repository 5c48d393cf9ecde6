//! Participant record and completed-day bookkeeping

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A user's enrollment in one challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub challenge_id: String,
    /// Zero-based day offsets from the challenge start, ascending
    #[serde(default)]
    pub completed_days: Vec<u32>,
    #[serde(default)]
    pub profile_photo_url: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, completed_days: Vec<u32>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            user_id: String::new(),
            challenge_id: String::new(),
            completed_days,
            profile_photo_url: String::new(),
        }
    }

    /// Display name, falling back to the id for unnamed records
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.id } else { &self.name }
    }

    pub fn has_completed(&self, day: u32) -> bool {
        self.completed_days.binary_search(&day).is_ok()
    }

    /// Report the first ordering or range problem in `completed_days`.
    ///
    /// Offsets may reach `day_count` itself because the day in progress is
    /// recorded one past the last fully elapsed day.
    pub fn validate(&self, day_count: u32) -> Result<(), InputError> {
        let mut previous: Option<u32> = None;
        for &day in &self.completed_days {
            if day > day_count {
                return Err(InputError::BeyondChallenge { day, day_count });
            }
            match previous {
                Some(p) if p == day => return Err(InputError::DuplicateDay { day }),
                Some(p) if p > day => return Err(InputError::OutOfOrder { previous: p, day }),
                _ => {}
            }
            previous = Some(day);
        }
        Ok(())
    }

    /// Sort and de-duplicate `completed_days`. Returns true if anything changed.
    pub fn normalize(&mut self) -> bool {
        let before = self.completed_days.len();
        let was_sorted = self.completed_days.windows(2).all(|w| w[0] < w[1]);
        self.completed_days.sort_unstable();
        self.completed_days.dedup();
        !was_sorted || before != self.completed_days.len()
    }

    /// Flip today's completion marker.
    ///
    /// `day_index` is the challenge's current 1-based day index; the marker
    /// for the day in progress is stored at that offset. Returns the new
    /// state (true = completed).
    pub fn toggle_today(&mut self, day_index: u32) -> bool {
        match self.completed_days.binary_search(&day_index) {
            Ok(pos) => {
                self.completed_days.remove(pos);
                false
            }
            Err(pos) => {
                self.completed_days.insert(pos, day_index);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_sorted_unique() {
        let p = Participant::new("1", "Ada", vec![0, 1, 4, 5]);
        assert!(p.validate(5).is_ok());
        assert!(Participant::new("2", "Bo", vec![]).validate(3).is_ok());
    }

    #[test]
    fn test_validate_reports_duplicates_and_order() {
        let dup = Participant::new("1", "Ada", vec![1, 2, 2]);
        assert_eq!(dup.validate(5), Err(InputError::DuplicateDay { day: 2 }));

        let desc = Participant::new("1", "Ada", vec![3, 1]);
        assert_eq!(
            desc.validate(5),
            Err(InputError::OutOfOrder { previous: 3, day: 1 })
        );

        let beyond = Participant::new("1", "Ada", vec![1, 9]);
        assert_eq!(
            beyond.validate(5),
            Err(InputError::BeyondChallenge { day: 9, day_count: 5 })
        );
    }

    #[test]
    fn test_normalize() {
        let mut p = Participant::new("1", "Ada", vec![4, 1, 1, 2]);
        assert!(p.normalize());
        assert_eq!(p.completed_days, vec![1, 2, 4]);
        assert!(!p.normalize());
    }

    #[test]
    fn test_toggle_today_keeps_order() {
        let mut p = Participant::new("1", "Ada", vec![1, 3]);
        assert!(p.toggle_today(2));
        assert_eq!(p.completed_days, vec![1, 2, 3]);
        assert!(!p.toggle_today(2));
        assert_eq!(p.completed_days, vec![1, 3]);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        assert_eq!(Participant::new("p-7", "", vec![]).display_name(), "p-7");
        assert_eq!(Participant::new("p-7", "Ada", vec![]).display_name(), "Ada");
    }
}
