//! Derived list statistics.
//!
//! Counts are recomputed from the full list on every call; there is no
//! incrementally maintained counter to drift out of sync.

use crate::model::task::Task;
use serde::Serialize;

/// Completion summary of one task list snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total_count: usize,
    pub completed_count: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total_count: tasks.len(),
            completed_count: tasks.iter().filter(|task| task.is_completed()).count(),
        }
    }

    pub fn open_count(&self) -> usize {
        self.total_count - self.completed_count
    }

    /// Completed share as a whole percentage, rounded half up.
    ///
    /// `None` for an empty list: the progress section is omitted rather
    /// than showing a clamped value.
    pub fn progress_percent(&self) -> Option<u8> {
        if self.total_count == 0 {
            return None;
        }
        let completed = self.completed_count as u64;
        let total = self.total_count as u64;
        let percent = (200 * completed + total) / (2 * total);
        Some(percent.min(100) as u8)
    }

    /// Unrounded completed share in `[0, 1]`, used for the bar fill.
    pub fn progress_ratio(&self) -> Option<f64> {
        if self.total_count == 0 {
            return None;
        }
        Some(self.completed_count as f64 / self.total_count as f64)
    }
}
