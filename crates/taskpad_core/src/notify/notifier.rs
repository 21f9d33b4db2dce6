//! Notification payloads and notifier implementations.

use log::info;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;

pub const TASK_ADDED_TITLE: &str = "Task added";
pub const TASK_ADDED_DESCRIPTION: &str = "Your new task has been added successfully!";
pub const TASK_DELETED_TITLE: &str = "Task deleted";
pub const TASK_DELETED_DESCRIPTION: &str = "Task has been removed from your list.";

/// Which list mutation produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TaskAdded,
    TaskDeleted,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaskAdded => "task_added",
            Self::TaskDeleted => "task_deleted",
        }
    }
}

/// Message shown as a transient toast by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn task_added() -> Self {
        Self {
            kind: NotificationKind::TaskAdded,
            title: TASK_ADDED_TITLE.to_string(),
            description: TASK_ADDED_DESCRIPTION.to_string(),
        }
    }

    pub fn task_deleted() -> Self {
        Self {
            kind: NotificationKind::TaskDeleted,
            title: TASK_DELETED_TITLE.to_string(),
            description: TASK_DELETED_DESCRIPTION.to_string(),
        }
    }
}

/// Fire-and-forget "show message" capability supplied by the host.
pub trait Notifier {
    fn show(&self, notification: &Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn show(&self, notification: &Notification) {
        (**self).show(notification);
    }
}

/// Notifier that records a metadata-only log event, then forwards to
/// the wrapped notifier.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier<N> {
    inner: N,
}

impl<N: Notifier> LogNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }
}

impl<N: Notifier> Notifier for LogNotifier<N> {
    fn show(&self, notification: &Notification) {
        info!(
            "event=notification_shown module=notify status=ok kind={}",
            notification.kind.as_str()
        );
        self.inner.show(notification);
    }
}

/// Notifier that buffers messages until the host drains them.
#[derive(Debug, Default)]
pub struct QueueNotifier {
    pending: RefCell<VecDeque<Notification>>,
}

impl QueueNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns buffered notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl Notifier for QueueNotifier {
    fn show(&self, notification: &Notification) {
        self.pending.borrow_mut().push_back(notification.clone());
    }
}
