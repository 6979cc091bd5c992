/// Storage layer for persisting habit data
///
/// This module defines the key/value persistence gateway the habit store
/// writes through. The gateway stores opaque strings (JSON blobs for the
/// collections, bare flags for preferences) under well-known keys.

pub mod file;
pub mod memory;

// Re-export the main storage types
pub use file::*;
pub use memory::*;

use async_trait::async_trait;
use thiserror::Error;

/// Well-known keys used by the application
///
/// These match the keys the original mobile build stored under, so a data
/// directory can be inspected (or migrated) by eye.
pub mod keys {
    /// JSON array of Habit
    pub const HABITS: &str = "habits";
    /// JSON array of CompletionRecord
    pub const COMPLETIONS: &str = "habitCompletions";
    /// The user's display name
    pub const USER_NAME: &str = "userName";
    /// "true" once the onboarding flow has finished
    pub const ONBOARDING_COMPLETE: &str = "onboardingComplete";
    /// "light" or "dark"; absent means follow the system
    pub const COLOR_SCHEME: &str = "appColorScheme";
    /// "true" when a premium entitlement has been recorded
    pub const PREMIUM: &str = "iap.premium.active";
}

/// Errors that can occur during storage operations
///
/// The habit store logs and swallows these: in-memory state stays
/// authoritative for the session and persistence is best-effort.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Trait defining the key/value persistence gateway
///
/// This trait allows swapping the file-backed store for an in-memory one
/// in tests while keeping the same interface. All operations are async;
/// callers never block UI-facing work on a write completing.
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// Read the value stored under `key`, or None if the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`; removing an absent key is not
    /// an error
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
