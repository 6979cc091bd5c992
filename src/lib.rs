/// Public library interface for the habitkeep tracker
///
/// This crate implements the core of a local-first daily habit tracker:
/// a habit store with write-through key/value persistence, a pure streak
/// engine, and a calendar grid builder. The binary in `main.rs` is a thin
/// presentation layer over these pieces.

use std::path::PathBuf;
use thiserror::Error;

pub mod calendar;
pub mod domain;
pub mod iap;
pub mod prefs;
pub mod stats;
pub mod storage;
pub mod store;

pub use domain::{CompletionRecord, DomainError, Habit, HabitId};
pub use prefs::{ColorScheme, Preferences};
pub use stats::HabitStats;
pub use storage::{FileGateway, MemoryGateway, StorageError, StorageGateway};
pub use store::{EditState, HabitStore};

/// Errors that can occur while assembling the application
///
/// Expected runtime conditions (empty input, missing records, flaky
/// persistence mid-session) never surface here; this covers boundary
/// failures like an unwritable data directory.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The assembled application: store and preferences over one file gateway
///
/// Owns both persisted collections for the process lifetime; presentation
/// reads derived views and requests mutations through the store.
pub struct HabitApp {
    gateway: FileGateway,
    store: HabitStore<FileGateway>,
    prefs: Preferences<FileGateway>,
}

impl HabitApp {
    /// Open the application against the given data directory
    ///
    /// Creates the directory if needed, then hydrates both collections and
    /// the preferences. Corrupt or absent data loads as empty.
    pub async fn open(data_dir: PathBuf) -> Result<Self, AppError> {
        tracing::info!("Opening habit data in {:?}", data_dir);

        let gateway = FileGateway::new(data_dir)?;
        let store = HabitStore::load(gateway.clone()).await;
        let prefs = Preferences::load(gateway.clone()).await;

        Ok(Self {
            gateway,
            store,
            prefs,
        })
    }

    pub fn store(&self) -> &HabitStore<FileGateway> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut HabitStore<FileGateway> {
        &mut self.store
    }

    pub fn prefs(&self) -> &Preferences<FileGateway> {
        &self.prefs
    }

    pub fn prefs_mut(&mut self) -> &mut Preferences<FileGateway> {
        &mut self.prefs
    }

    pub fn gateway(&self) -> &FileGateway {
        &self.gateway
    }
}
