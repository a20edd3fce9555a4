//! Schedulable task records

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// The unique identifier of a [`Task`], stable for the whole lifetime of the record
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId {
    content: String,
}
impl TaskId {
    /// Generate a random TaskId
    pub fn random() -> Self {
        let content = Uuid::new_v4().to_hyphenated().to_string();
        Self { content }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(TaskId { content })
    }
}

/// A single schedulable item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Persistent, globally unique identifier of this task
    id: TaskId,

    /// The calendar date this task is scheduled on, as a `YYYY-MM-DD` string
    date: String,
    /// The clock time this task is scheduled at, as a 24-hour `HH:MM` string.
    /// Both fields being zero-padded, plain string comparison on `(date, time)` is chronological order
    time: String,
    /// The free-form description of the task
    text: String,

    /// Whether this task has been completed
    completed: bool,
}

impl Task {
    /// Create a brand new Task, not completed yet.
    /// This will pick a new (random) task ID.
    pub fn new(date: String, time: String, text: String) -> Self {
        let new_task_id = TaskId::random();
        Self::new_with_parameters(new_task_id, date, time, text, false)
    }

    /// Create a new Task instance with every field provided, e.g. when decoding stored data
    pub fn new_with_parameters(id: TaskId, date: String, time: String, text: String, completed: bool) -> Self {
        Self { id, date, time, text, completed }
    }

    pub fn id(&self) -> &TaskId     { &self.id        }
    pub fn date(&self) -> &str      { &self.date      }
    pub fn time(&self) -> &str      { &self.time      }
    pub fn text(&self) -> &str      { &self.text      }
    pub fn completed(&self) -> bool { self.completed  }

    /// Set the completion flag
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
