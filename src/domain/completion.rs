/// CompletionRecord entity for per-day habit completions
///
/// This module defines the CompletionRecord struct that marks a habit as
/// done on a specific calendar day. The absence of a record for a
/// (habit, day) pair means "not completed" - no explicit false record is
/// ever stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::HabitId;

/// A record of completing a habit on a specific calendar day
///
/// The date is a calendar-day identifier, never an instant: two records
/// for the same habit are equal exactly when their `(habit_id, date)`
/// pairs match, regardless of when they were written.
///
/// The serialized shape matches what the persistence gateway stores:
/// `{ "habitId": string, "date": "YYYY-MM-DD", "completed": true }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Which habit this completion is for
    #[serde(rename = "habitId")]
    pub habit_id: HabitId,
    /// Which calendar day was completed
    pub date: NaiveDate,
    /// Always true for a record that exists; kept for wire compatibility
    pub completed: bool,
}

impl CompletionRecord {
    /// Create a completion record for the given habit and day
    pub fn new(habit_id: HabitId, date: NaiveDate) -> Self {
        Self {
            habit_id,
            date,
            completed: true,
        }
    }

    /// Check whether this record marks the given (habit, day) pair
    pub fn matches(&self, habit_id: &HabitId, date: NaiveDate) -> bool {
        self.habit_id == *habit_id && self.date == date
    }
}
