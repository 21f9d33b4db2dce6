//! Task list controller.
//!
//! # Responsibility
//! - Own the authoritative task list and the draft input text.
//! - Apply add/toggle/delete and emit transient notifications.
//! - Translate host UI events into list operations.
//!
//! # Invariants
//! - Only this controller mutates the list.
//! - New tasks are prepended; no other reordering happens.
//! - Task ids are unique within the list.
//! - Invalid input and unknown ids are silent no-ops, never errors.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{Task, TaskId};
use crate::notify::notifier::{Notification, Notifier};
use crate::service::stats::TaskStats;
use crate::view::task_list_view::TaskListView;
use crate::view::task_row::TaskAction;
use log::debug;

/// Behavior switches for [`TaskListController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskListOptions {
    /// Emit "Task deleted" even when the id was not in the list.
    pub notify_on_missing_delete: bool,
}

impl Default for TaskListOptions {
    fn default() -> Self {
        Self {
            notify_on_missing_delete: true,
        }
    }
}

/// Result of [`TaskListController::add_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(TaskId),
    /// Draft was empty or whitespace-only; nothing changed.
    Rejected,
}

/// Result of [`TaskListController::toggle_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Toggled { id: TaskId, completed: bool },
    NotFound,
}

/// Result of [`TaskListController::delete_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Task),
    NotFound,
}

/// Keys the input field reports while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
}

/// Events delivered by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    DraftChanged(String),
    SubmitClicked,
    KeyPressed(Key),
    Row(TaskAction),
}

/// What handling one [`HostEvent`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    DraftUpdated,
    Add(AddOutcome),
    Toggle(ToggleOutcome),
    Delete(DeleteOutcome),
    Ignored,
}

/// Owner of the task list state.
pub struct TaskListController<N: Notifier, C: Clock = SystemClock> {
    tasks: Vec<Task>,
    draft_text: String,
    notifier: N,
    clock: C,
    options: TaskListOptions,
}

impl<N: Notifier> TaskListController<N> {
    /// Creates an empty list stamped by the wall clock.
    pub fn new(notifier: N) -> Self {
        Self::with_parts(notifier, SystemClock, TaskListOptions::default())
    }
}

impl<N: Notifier, C: Clock> TaskListController<N, C> {
    pub fn with_parts(notifier: N, clock: C, options: TaskListOptions) -> Self {
        Self {
            tasks: Vec::new(),
            draft_text: String::new(),
            notifier,
            clock,
            options,
        }
    }

    /// Tasks, most recent first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn options(&self) -> TaskListOptions {
        self.options
    }

    /// Replaces the pending input text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Creates a task from the draft and prepends it.
    ///
    /// # Contract
    /// - Blank drafts are rejected without notification and left as-is.
    /// - On success the draft is cleared and "Task added" is shown.
    pub fn add_task(&mut self) -> AddOutcome {
        let task = match Task::new(&self.draft_text, self.clock.now_millis()) {
            Ok(task) => task,
            Err(_) => {
                debug!("event=task_add module=task_list status=rejected reason=empty_text");
                return AddOutcome::Rejected;
            }
        };

        let id = task.id();
        self.tasks.insert(0, task);
        self.draft_text.clear();
        debug!(
            "event=task_add module=task_list status=ok task_id={} total={}",
            id,
            self.tasks.len()
        );
        self.notifier.show(&Notification::task_added());
        AddOutcome::Added(id)
    }

    /// Flips completion of the task with `id`; positions are unchanged.
    pub fn toggle_task(&mut self, id: TaskId) -> ToggleOutcome {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.toggle();
                debug!(
                    "event=task_toggle module=task_list status=ok task_id={} completed={}",
                    id,
                    task.is_completed()
                );
                ToggleOutcome::Toggled {
                    id,
                    completed: task.is_completed(),
                }
            }
            None => {
                debug!("event=task_toggle module=task_list status=not_found task_id={id}");
                ToggleOutcome::NotFound
            }
        }
    }

    /// Removes the task with `id`.
    ///
    /// "Task deleted" is shown on removal, and also for an unknown id
    /// unless `notify_on_missing_delete` is off.
    pub fn delete_task(&mut self, id: TaskId) -> DeleteOutcome {
        let outcome = match self.tasks.iter().position(|task| task.id() == id) {
            Some(index) => DeleteOutcome::Deleted(self.tasks.remove(index)),
            None => DeleteOutcome::NotFound,
        };

        let found = matches!(outcome, DeleteOutcome::Deleted(_));
        debug!(
            "event=task_delete module=task_list status={} task_id={} total={}",
            if found { "ok" } else { "not_found" },
            id,
            self.tasks.len()
        );
        if found || self.options.notify_on_missing_delete {
            self.notifier.show(&Notification::task_deleted());
        }
        outcome
    }

    /// Applies an action emitted by a task row.
    pub fn dispatch(&mut self, action: TaskAction) -> EventOutcome {
        match action {
            TaskAction::Toggle(id) => EventOutcome::Toggle(self.toggle_task(id)),
            TaskAction::Delete(id) => EventOutcome::Delete(self.delete_task(id)),
        }
    }

    /// Single entry point for host UI events.
    pub fn handle(&mut self, event: HostEvent) -> EventOutcome {
        match event {
            HostEvent::DraftChanged(text) => {
                self.set_draft(text);
                EventOutcome::DraftUpdated
            }
            HostEvent::SubmitClicked | HostEvent::KeyPressed(Key::Enter) => {
                EventOutcome::Add(self.add_task())
            }
            HostEvent::KeyPressed(_) => EventOutcome::Ignored,
            HostEvent::Row(action) => self.dispatch(action),
        }
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.stats().completed_count
    }

    /// `None` while the list is empty.
    pub fn progress_percent(&self) -> Option<u8> {
        self.stats().progress_percent()
    }

    pub fn view(&self) -> TaskListView {
        TaskListView::render(&self.tasks, &self.draft_text)
    }
}
