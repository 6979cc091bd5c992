/// Habit store: authoritative in-memory state with write-through persistence
///
/// This is the single place where the habit and completion collections are
/// mutated. Every mutation applies to memory first and then re-serializes
/// the affected collection in full through the persistence gateway.
/// Persistence is best-effort: failures are logged and swallowed, and the
/// in-memory state stays authoritative for the rest of the session.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::{CompletionRecord, Habit, HabitId};
use crate::storage::{keys, StorageGateway};

/// Which habit, if any, is currently being renamed inline
///
/// A single process-wide slot: starting an edit for one habit implicitly
/// abandons any edit in progress for another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    NotEditing,
    Editing { id: HabitId, buffer: String },
}

/// Owner of the habit and completion collections
///
/// Generic over the persistence gateway so tests can run against the
/// in-memory store.
pub struct HabitStore<G> {
    gateway: G,
    habits: Vec<Habit>,
    completions: Vec<CompletionRecord>,
    edit: EditState,
    new_habit_input: String,
}

impl<G: StorageGateway> HabitStore<G> {
    /// Load both collections from the gateway
    ///
    /// An absent or unparsable key yields an empty collection; loading
    /// never fails.
    pub async fn load(gateway: G) -> Self {
        let habits = Self::load_collection::<Habit>(&gateway, keys::HABITS).await;
        let completions =
            Self::load_collection::<CompletionRecord>(&gateway, keys::COMPLETIONS).await;

        debug!(
            "Loaded {} habits and {} completion records",
            habits.len(),
            completions.len()
        );

        Self {
            gateway,
            habits,
            completions,
            edit: EditState::NotEditing,
            new_habit_input: String::new(),
        }
    }

    async fn load_collection<T: serde::de::DeserializeOwned>(gateway: &G, key: &str) -> Vec<T> {
        match gateway.get(key).await {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("Discarding unparsable data under key '{}': {}", key, e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to load key '{}': {}", key, e);
                Vec::new()
            }
        }
    }

    // Read-side accessors

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn habit(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == *id)
    }

    pub fn completions(&self) -> &[CompletionRecord] {
        &self.completions
    }

    /// Completed dates for one habit, in insertion order
    pub fn completion_dates(&self, habit_id: &HabitId) -> Vec<NaiveDate> {
        self.completions
            .iter()
            .filter(|c| c.habit_id == *habit_id)
            .map(|c| c.date)
            .collect()
    }

    pub fn is_completed(&self, habit_id: &HabitId, date: NaiveDate) -> bool {
        self.completions.iter().any(|c| c.matches(habit_id, date))
    }

    pub fn editing(&self) -> &EditState {
        &self.edit
    }

    pub fn new_habit_input(&self) -> &str {
        &self.new_habit_input
    }

    pub fn set_new_habit_input(&mut self, text: impl Into<String>) {
        self.new_habit_input = text.into();
    }

    // Mutations (in-memory first, then write-through)

    /// Add a habit from raw user input
    ///
    /// The name is trimmed; an empty result is a silent no-op. On success
    /// the new habit is appended (list order is insertion order), the
    /// new-habit input buffer is cleared, and the collection is persisted.
    pub async fn add_habit(&mut self, raw_name: &str) -> Option<Habit> {
        let habit = match Habit::new(raw_name) {
            Ok(habit) => habit,
            Err(e) => {
                debug!("Rejected new habit: {}", e);
                return None;
            }
        };

        debug!("Created habit: {} ({})", habit.name, habit.id);
        self.habits.push(habit.clone());
        self.new_habit_input.clear();
        self.sync_habits().await;
        Some(habit)
    }

    /// Delete a habit and, cascading, its completion records
    ///
    /// Returns false if no habit matched. A pending edit of the deleted
    /// habit is abandoned.
    pub async fn delete_habit(&mut self, id: &HabitId) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != *id);
        if self.habits.len() == before {
            return false;
        }

        if matches!(&self.edit, EditState::Editing { id: editing, .. } if editing == id) {
            self.edit = EditState::NotEditing;
        }

        let orphaned = self.completions.len();
        self.completions.retain(|c| c.habit_id != *id);
        debug!(
            "Deleted habit {} and {} completion records",
            id,
            orphaned - self.completions.len()
        );

        self.sync_habits().await;
        self.sync_completions().await;
        true
    }

    /// Begin renaming a habit, seeding the edit buffer with its current name
    pub fn start_editing(&mut self, id: &HabitId, current_name: &str) {
        self.edit = EditState::Editing {
            id: *id,
            buffer: current_name.to_string(),
        };
    }

    /// Replace the in-progress edit buffer
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let EditState::Editing { buffer, .. } = &mut self.edit {
            *buffer = text.into();
        }
    }

    /// Apply the in-progress rename to the given habit
    ///
    /// The buffer is trimmed; if it comes up empty the edit is silently
    /// discarded and the name is left unchanged. Edit state is cleared
    /// either way.
    pub async fn commit_editing(&mut self, id: &HabitId) {
        let edit = std::mem::take(&mut self.edit);

        let EditState::Editing { id: editing, buffer } = edit else {
            return;
        };
        if editing != *id {
            return;
        }

        let renamed = self
            .habits
            .iter_mut()
            .find(|h| h.id == *id)
            .and_then(|habit| habit.rename(&buffer).ok());

        match renamed {
            Some(()) => {
                debug!("Renamed habit {}", id);
                self.sync_habits().await;
            }
            None => debug!("Discarded rename of habit {}", id),
        }
    }

    /// Abandon any rename in progress
    pub fn cancel_editing(&mut self) {
        self.edit = EditState::NotEditing;
    }

    /// Flip completion state for a (habit, day) pair
    ///
    /// Removes the record if present, inserts one otherwise; this is the
    /// sole mutator of completion state, so at most one record ever exists
    /// per pair. Returns the new completion state.
    pub async fn toggle_completion(&mut self, habit_id: &HabitId, date: NaiveDate) -> bool {
        let completed = match self.completions.iter().position(|c| c.matches(habit_id, date)) {
            Some(index) => {
                self.completions.remove(index);
                false
            }
            None => {
                self.completions.push(CompletionRecord::new(*habit_id, date));
                true
            }
        };

        debug!(
            "Toggled habit {} on {}: now {}",
            habit_id,
            date,
            if completed { "completed" } else { "not completed" }
        );
        self.sync_completions().await;
        completed
    }

    // Write-through persistence (best-effort, errors swallowed)

    async fn sync_habits(&self) {
        Self::sync_collection(&self.gateway, keys::HABITS, &self.habits).await;
    }

    async fn sync_completions(&self) {
        Self::sync_collection(&self.gateway, keys::COMPLETIONS, &self.completions).await;
    }

    async fn sync_collection<T: serde::Serialize>(gateway: &G, key: &str, items: &[T]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize collection '{}': {}", key, e);
                return;
            }
        };

        if let Err(e) = gateway.set(key, &json).await {
            warn!("Failed to persist collection '{}': {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryGateway;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    async fn empty_store() -> HabitStore<MemoryGateway> {
        HabitStore::load(MemoryGateway::new()).await
    }

    #[tokio::test]
    async fn test_add_habit_trims_name() {
        let mut store = empty_store().await;
        let habit = store.add_habit("  Read  ").await.unwrap();

        assert_eq!(habit.name, "Read");
        assert_eq!(store.habits().len(), 1);
    }

    #[tokio::test]
    async fn test_add_habit_rejects_blank_input() {
        let mut store = empty_store().await;

        assert!(store.add_habit("   ").await.is_none());
        assert!(store.habits().is_empty());
    }

    #[tokio::test]
    async fn test_add_habit_clears_input_buffer() {
        let mut store = empty_store().await;
        store.set_new_habit_input("Run");

        store.add_habit("Run").await.unwrap();
        assert_eq!(store.new_habit_input(), "");
    }

    #[tokio::test]
    async fn test_habits_keep_insertion_order() {
        let mut store = empty_store().await;
        store.add_habit("First").await.unwrap();
        store.add_habit("Second").await.unwrap();
        store.add_habit("Third").await.unwrap();

        let names: Vec<_> = store.habits().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_toggle_flips_membership() {
        let mut store = empty_store().await;
        let habit = store.add_habit("Run").await.unwrap();
        let date = d(2024, 3, 12);

        assert!(store.toggle_completion(&habit.id, date).await);
        assert!(store.is_completed(&habit.id, date));

        assert!(!store.toggle_completion(&habit.id, date).await);
        assert!(!store.is_completed(&habit.id, date));
        assert!(store.completions().is_empty());
    }

    #[tokio::test]
    async fn test_at_most_one_record_per_pair() {
        let mut store = empty_store().await;
        let habit = store.add_habit("Run").await.unwrap();
        let date = d(2024, 3, 12);

        for _ in 0..5 {
            store.toggle_completion(&habit.id, date).await;
        }

        let matching = store
            .completions()
            .iter()
            .filter(|c| c.matches(&habit.id, date))
            .count();
        assert!(matching <= 1);
        // Odd number of toggles leaves the pair completed.
        assert_eq!(matching, 1);
    }

    #[tokio::test]
    async fn test_rename_flow() {
        let mut store = empty_store().await;
        let habit = store.add_habit("Run").await.unwrap();

        store.start_editing(&habit.id, "Run");
        store.set_edit_buffer("Morning Run");
        store.commit_editing(&habit.id).await;

        assert_eq!(store.habit(&habit.id).unwrap().name, "Morning Run");
        assert_eq!(*store.editing(), EditState::NotEditing);
    }

    #[tokio::test]
    async fn test_rename_discarded_when_buffer_empty() {
        let mut store = empty_store().await;
        let habit = store.add_habit("Run").await.unwrap();

        store.start_editing(&habit.id, "Run");
        store.set_edit_buffer("");
        store.commit_editing(&habit.id).await;

        assert_eq!(store.habit(&habit.id).unwrap().name, "Run");
        assert_eq!(*store.editing(), EditState::NotEditing);
    }

    #[tokio::test]
    async fn test_cancel_editing_leaves_name_unchanged() {
        let mut store = empty_store().await;
        let habit = store.add_habit("Run").await.unwrap();

        store.start_editing(&habit.id, "Run");
        store.set_edit_buffer("Sprint");
        store.cancel_editing();

        assert_eq!(store.habit(&habit.id).unwrap().name, "Run");
        assert_eq!(*store.editing(), EditState::NotEditing);
    }

    #[tokio::test]
    async fn test_single_edit_slot() {
        let mut store = empty_store().await;
        let first = store.add_habit("First").await.unwrap();
        let second = store.add_habit("Second").await.unwrap();

        store.start_editing(&first.id, "First");
        store.set_edit_buffer("Renamed First");
        // Starting another edit abandons the first one.
        store.start_editing(&second.id, "Second");
        store.commit_editing(&first.id).await;

        assert_eq!(store.habit(&first.id).unwrap().name, "First");
        // The abandoned commit cleared the slot for the second habit too.
        assert_eq!(*store.editing(), EditState::NotEditing);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_completions() {
        let mut store = empty_store().await;
        let kept = store.add_habit("Kept").await.unwrap();
        let removed = store.add_habit("Removed").await.unwrap();

        store.toggle_completion(&kept.id, d(2024, 3, 12)).await;
        store.toggle_completion(&removed.id, d(2024, 3, 12)).await;
        store.toggle_completion(&removed.id, d(2024, 3, 13)).await;

        assert!(store.delete_habit(&removed.id).await);

        assert!(store.habit(&removed.id).is_none());
        assert_eq!(store.completions().len(), 1);
        assert!(store.is_completed(&kept.id, d(2024, 3, 12)));
    }

    #[tokio::test]
    async fn test_delete_unknown_habit_is_noop() {
        let mut store = empty_store().await;
        store.add_habit("Run").await.unwrap();

        assert!(!store.delete_habit(&HabitId::new()).await);
        assert_eq!(store.habits().len(), 1);
    }

    #[tokio::test]
    async fn test_load_tolerates_corrupt_collections() {
        let gateway = MemoryGateway::new();
        gateway.seed(keys::HABITS, "{not json");
        gateway.seed(keys::COMPLETIONS, "42");

        let store = HabitStore::load(gateway).await;
        assert!(store.habits().is_empty());
        assert!(store.completions().is_empty());
    }

    #[tokio::test]
    async fn test_mutations_write_through() {
        let gateway = MemoryGateway::new();
        let mut store = HabitStore::load(gateway.clone()).await;
        let habit = store.add_habit("Run").await.unwrap();
        store.toggle_completion(&habit.id, d(2024, 3, 12)).await;

        let reloaded = HabitStore::load(gateway).await;
        assert_eq!(reloaded.habits().len(), 1);
        assert!(reloaded.is_completed(&habit.id, d(2024, 3, 12)));
    }
}
