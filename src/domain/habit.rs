/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a named
/// activity the user tracks per calendar day, along with its validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId};

/// A habit represents something the user wants to do every day
///
/// This is the core entity in the system. A habit carries only its
/// identity, display name, and creation time; per-day completion lives in
/// separate CompletionRecord rows keyed by habit ID.
///
/// The serialized shape matches what the persistence gateway stores:
/// `{ "id": string, "name": string, "createdAt": ISO-8601 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit, assigned at creation
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// When this habit was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit from raw user input
    ///
    /// The name is trimmed before validation; an empty trimmed name is
    /// rejected. On success the habit gets a fresh ID and the current
    /// timestamp.
    pub fn new(raw_name: &str) -> Result<Self, DomainError> {
        let name = Self::validate_name(raw_name)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            created_at: Utc::now(),
        })
    }

    /// Rename this habit after validating the new name
    pub fn rename(&mut self, raw_name: &str) -> Result<(), DomainError> {
        self.name = Self::validate_name(raw_name)?;
        Ok(())
    }

    /// Validate a habit name and return its trimmed form
    fn validate_name(raw: &str) -> Result<String, DomainError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(trimmed.to_string())
    }
}
