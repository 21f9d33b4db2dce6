//! Render model for the whole task list screen.

use crate::model::task::Task;
use crate::service::stats::TaskStats;
use crate::view::task_row::{TaskRow, TaskRowView};
use serde::Serialize;

pub const APP_TITLE: &str = "Todo App";
pub const APP_TAGLINE: &str = "Stay organized and productive";
pub const INPUT_PLACEHOLDER: &str = "Add a new task...";
pub const EMPTY_STATE_TITLE: &str = "No tasks yet";
pub const EMPTY_STATE_HINT: &str = "Add your first task above to get started";
pub const PROGRESS_LABEL: &str = "Progress";

/// `completed of total` header line, present only for non-empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSummary {
    pub completed_count: usize,
    pub total_count: usize,
}

impl HeaderSummary {
    pub fn label(&self) -> String {
        format!(
            "{} of {} tasks completed",
            self.completed_count, self.total_count
        )
    }
}

/// Progress section, present only for non-empty lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSection {
    /// Rounded percentage in `[0, 100]`.
    pub percent: u8,
    /// Unrounded bar fill in `[0, 1]`.
    pub ratio: f64,
}

impl ProgressSection {
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// List area: either the placeholder or one row per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum ListBody {
    Empty,
    Rows(Vec<TaskRowView>),
}

/// Snapshot of everything the host needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskListView {
    pub draft_text: String,
    pub header: Option<HeaderSummary>,
    pub body: ListBody,
    pub progress: Option<ProgressSection>,
}

impl TaskListView {
    /// Builds the view from the owner's state, rows in list order.
    pub fn render(tasks: &[Task], draft_text: &str) -> Self {
        let stats = TaskStats::from_tasks(tasks);
        let header = (stats.total_count > 0).then(|| HeaderSummary {
            completed_count: stats.completed_count,
            total_count: stats.total_count,
        });
        let progress = stats
            .progress_percent()
            .zip(stats.progress_ratio())
            .map(|(percent, ratio)| ProgressSection { percent, ratio });
        let body = if tasks.is_empty() {
            ListBody::Empty
        } else {
            ListBody::Rows(tasks.iter().map(|task| TaskRow::new(task).view()).collect())
        };

        Self {
            draft_text: draft_text.to_string(),
            header,
            body,
            progress,
        }
    }

    /// Rows in display order; empty for the placeholder state.
    pub fn rows(&self) -> &[TaskRowView] {
        match &self.body {
            ListBody::Empty => &[],
            ListBody::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, ListBody::Empty)
    }
}
