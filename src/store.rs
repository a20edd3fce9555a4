//! This module provides the task store, the owner of the schedule
//!
//! The store keeps its task list sorted chronologically at all times, and mirrors it
//! in full to its storage slot (as a JSON array) after every mutation.

use std::error::Error;

use crate::task::{Task, TaskId};
use crate::traits::Storage;
use crate::utils::compare_chronological;

/// A callback invoked with the up-to-date task list after every completed mutation,
/// e.g. to refresh a display
pub type ChangeObserver = Box<dyn Fn(&[Task])>;

/// The task store. `S` is the storage backend its slot lives in.
pub struct TaskStore<S: Storage> {
    storage: S,
    tasks: Vec<Task>,
    observers: Vec<ChangeObserver>,
}

impl<S: Storage> TaskStore<S> {
    /// Create an empty store over the given slot.
    /// Note that the slot itself is only written on the first mutation.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            tasks: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Initialize a store from the content of its storage slot.
    /// An absent slot yields an empty store; a slot that cannot be read or decoded is an error.
    pub fn load(storage: S) -> Result<Self, Box<dyn Error>> {
        let mut tasks: Vec<Task> = match storage.read()? {
            None => Vec::new(),
            Some(content) => serde_json::from_str(&content)?,
        };
        // Stored data is expected sorted already, but the invariant is cheap to restore
        tasks.sort_by(compare_chronological);

        Ok(Self {
            storage,
            tasks,
            observers: Vec::new(),
        })
    }

    /// Initialize a store from the content of its storage slot, falling back to an
    /// empty store (with a logged warning) in case the slot content is not usable
    pub fn load_or_default(storage: S) -> Self {
        let mut tasks: Vec<Task> = match storage.read() {
            Ok(None) => Vec::new(),
            Ok(Some(content)) => match serde_json::from_str(&content) {
                Ok(tasks) => tasks,
                Err(err) => {
                    log::warn!("Invalid stored task list ({}). Starting from an empty list", err);
                    Vec::new()
                }
            },
            Err(err) => {
                log::warn!("Unable to read the stored task list ({}). Starting from an empty list", err);
                Vec::new()
            }
        };
        tasks.sort_by(compare_chronological);

        Self {
            storage,
            tasks,
            observers: Vec::new(),
        }
    }

    /// Schedule a new task.
    ///
    /// In case any field is empty the call is ignored and `None` is returned
    /// (input syntax is the responsibility of the input widgets, it is not re-checked here).
    /// Otherwise this creates a not-yet-completed record under a fresh random id,
    /// inserts it at its chronological position, and returns its id.
    pub fn add(&mut self, date: &str, time: &str, text: &str) -> Option<TaskId> {
        if date.is_empty() || time.is_empty() || text.is_empty() {
            return None;
        }

        let task = Task::new(date.to_string(), time.to_string(), text.to_string());
        let id = task.id().clone();
        self.tasks.push(task);
        // sort_by is stable, so tasks sharing a (date, time) keep their insertion order
        self.tasks.sort_by(compare_chronological);

        self.mutated();
        Some(id)
    }

    /// Remove the task with this id. Unknown ids are silently ignored.
    pub fn delete(&mut self, id: &TaskId) {
        let len_before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() == len_before {
            return;
        }
        self.mutated();
    }

    /// Set the completion flag of the task with this id. Unknown ids are silently ignored.
    pub fn set_completed(&mut self, id: &TaskId, completed: bool) {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            None => return,
            Some(task) => task.set_completed(completed),
        }
        self.mutated();
    }

    /// The current task list, sorted by ascending `(date, time)`
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The storage backend this store persists into
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a callback that will be invoked with the new task list
    /// after every completed mutation
    pub fn on_change(&mut self, observer: ChangeObserver) {
        self.observers.push(observer);
    }

    /// Persist the current list, then notify the observers.
    /// A storage failure does not abort the mutation, the next successful write
    /// will persist the up-to-date list anyway.
    fn mutated(&mut self) {
        self.save_to_storage();
        for observer in &self.observers {
            observer(&self.tasks);
        }
    }

    fn save_to_storage(&mut self) {
        let content = match serde_json::to_string(&self.tasks) {
            Err(err) => {
                log::warn!("Unable to serialize the task list: {}", err);
                return;
            }
            Ok(content) => content,
        };

        if let Err(err) = self.storage.write(&content) {
            log::warn!("Unable to save the task list: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::storage::MemoryStorage;

    #[test]
    fn serde_store() {
        let mut store = TaskStore::new(MemoryStorage::new());
        store.add("2024-03-14", "09:30", "Call the plumber").unwrap();
        store.add("2024-03-13", "18:00", "Groceries").unwrap();

        let saved = store.storage().content().unwrap().to_string();
        let retrieved_store = TaskStore::load(MemoryStorage::with_content(saved)).unwrap();
        assert_eq!(store.tasks(), retrieved_store.tasks());
    }

    #[test]
    fn failed_write_is_not_fatal() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes(1, 1);
        let mut store = TaskStore::new(storage);

        store.add("2024-03-13", "18:00", "Groceries").unwrap();
        // This write fails, but the in-memory list must still be updated
        store.add("2024-03-14", "09:30", "Call the plumber").unwrap();
        assert_eq!(store.len(), 2);

        // The next mutation persists the whole up-to-date list
        store.add("2024-03-15", "08:00", "Take out the bins").unwrap();
        let saved: Vec<Task> = serde_json::from_str(store.storage().content().unwrap()).unwrap();
        assert_eq!(saved, store.tasks());
    }
}
