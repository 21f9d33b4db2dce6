//! Task domain model.
//!
//! # Responsibility
//! - Define the single entity held by the task list.
//! - Enforce text/id invariants at construction and deserialization.
//!
//! # Invariants
//! - `id` is never nil and never reused for another task.
//! - `text` is trimmed and never empty.
//! - `text` and `created_at` are immutable after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one task for its whole lifetime.
pub type TaskId = Uuid;

/// Validation errors for task construction and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Nil UUID cannot identify a task.
    NilId,
    /// Text is empty or whitespace-only.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyText => write!(f, "task text must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Error returned when a task id string cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIdParseError {
    Malformed(String),
    Nil,
}

impl Display for TaskIdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => write!(f, "invalid task id `{value}`"),
            Self::Nil => write!(f, "task id must not be nil"),
        }
    }
}

impl Error for TaskIdParseError {}

/// Parses the string form of a task id used by FFI and CLI hosts.
pub fn parse_task_id(value: &str) -> Result<TaskId, TaskIdParseError> {
    let trimmed = value.trim();
    let id = Uuid::parse_str(trimmed)
        .map_err(|_| TaskIdParseError::Malformed(trimmed.to_string()))?;
    if id.is_nil() {
        return Err(TaskIdParseError::Nil);
    }
    Ok(id)
}

/// One to-do entry.
///
/// Fields are read through accessors so the immutable parts stay
/// immutable; only `completed` changes, and only via [`Task::toggle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    /// Unix epoch milliseconds.
    created_at: i64,
}

/// Unchecked wire shape; converted into [`Task`] through validation.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
    created_at: i64,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Task::with_id(record.id, record.text, record.created_at)?;
        task.completed = record.completed;
        Ok(task)
    }
}

impl Task {
    /// Creates an open task with a freshly generated id.
    ///
    /// `text` is trimmed before it is stored.
    pub fn new(text: impl AsRef<str>, created_at: i64) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), text, created_at)
    }

    /// Creates an open task with a caller-provided id.
    ///
    /// Used when a host re-hydrates a snapshot it already holds ids for.
    pub fn with_id(
        id: TaskId,
        text: impl AsRef<str>,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: text.as_ref().trim().to_string(),
            completed: false,
            created_at,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks id and text invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Creation time in Unix epoch milliseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Flips the completion flag. Any number of toggles is allowed.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
