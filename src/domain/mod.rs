/// Domain module containing core entities and their validation rules
///
/// This module defines the core types (Habit, CompletionRecord, HabitId)
/// that represent the fundamental concepts in the habit tracking system.

pub mod completion;
pub mod habit;
pub mod types;

// Re-export public types for easy access
pub use completion::*;
pub use habit::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
///
/// Validation failures are expected conditions: the store treats them as
/// silent no-ops rather than surfacing them to callers.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),
}
