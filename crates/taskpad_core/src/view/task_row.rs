//! Stateless presentation of one task.
//!
//! # Responsibility
//! - Project a `Task` into display fields.
//! - Turn row control activations into `TaskAction` values for the owner.
//!
//! # Invariants
//! - A row never mutates the task it renders.

use crate::model::task::{Task, TaskId};
use chrono::{Local, TimeZone};
use serde::Serialize;

const CREATED_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Intent emitted by a row control and applied by the list owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Toggle(TaskId),
    Delete(TaskId),
}

impl TaskAction {
    pub fn task_id(self) -> TaskId {
        match self {
            Self::Toggle(id) | Self::Delete(id) => id,
        }
    }
}

/// Render-ready fields for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRowView {
    pub id: TaskId,
    pub text: String,
    /// Drives the struck-through "done" styling.
    pub completed: bool,
    pub created_label: String,
}

/// Borrowing row component over one task.
#[derive(Debug, Clone, Copy)]
pub struct TaskRow<'a> {
    task: &'a Task,
}

impl<'a> TaskRow<'a> {
    pub fn new(task: &'a Task) -> Self {
        Self { task }
    }

    pub fn view(&self) -> TaskRowView {
        TaskRowView {
            id: self.task.id(),
            text: self.task.text().to_string(),
            completed: self.task.is_completed(),
            created_label: format_created_date(self.task.created_at()),
        }
    }

    /// Toggle control activation.
    pub fn toggle(&self) -> TaskAction {
        TaskAction::Toggle(self.task.id())
    }

    /// Delete control activation; available regardless of completion.
    pub fn delete(&self) -> TaskAction {
        TaskAction::Delete(self.task.id())
    }
}

/// Formats epoch milliseconds as a local calendar date (`M/D/YYYY`).
pub fn format_created_date(created_at: i64) -> String {
    format_created_date_in(created_at, &Local)
}

/// Same as [`format_created_date`] for an explicit time zone.
pub fn format_created_date_in<Tz: TimeZone>(created_at: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(created_at).single() {
        Some(moment) => moment.format(CREATED_DATE_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_created_date_in, TaskAction, TaskRow};
    use crate::model::task::Task;
    use chrono::Utc;

    // 2024-03-05T10:00:00Z
    const CREATED_AT: i64 = 1_709_632_800_000;

    #[test]
    fn view_projects_task_fields() {
        let task = Task::new("Water plants", CREATED_AT).expect("valid task");
        let view = TaskRow::new(&task).view();
        assert_eq!(view.id, task.id());
        assert_eq!(view.text, "Water plants");
        assert!(!view.completed);
        assert!(!view.created_label.is_empty());
    }

    #[test]
    fn controls_forward_task_id() {
        let task = Task::new("Water plants", CREATED_AT).expect("valid task");
        let row = TaskRow::new(&task);
        assert_eq!(row.toggle(), TaskAction::Toggle(task.id()));
        assert_eq!(row.delete(), TaskAction::Delete(task.id()));
        assert_eq!(row.delete().task_id(), task.id());
    }

    #[test]
    fn created_date_uses_month_day_year() {
        assert_eq!(format_created_date_in(CREATED_AT, &Utc), "3/5/2024");
    }
}
