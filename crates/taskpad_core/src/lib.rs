//! Core domain logic for Taskpad.
//! This crate owns the task list state and every rule applied to it.

pub mod clock;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{parse_task_id, Task, TaskId, TaskIdParseError, TaskValidationError};
pub use notify::notifier::{
    LogNotifier, Notification, NotificationKind, Notifier, QueueNotifier,
};
pub use service::stats::TaskStats;
pub use service::task_list::{
    AddOutcome, DeleteOutcome, EventOutcome, HostEvent, Key, TaskListController,
    TaskListOptions, ToggleOutcome,
};
pub use view::task_list_view::{
    HeaderSummary, ListBody, ProgressSection, TaskListView, APP_TAGLINE, APP_TITLE,
    EMPTY_STATE_HINT, EMPTY_STATE_TITLE, INPUT_PLACEHOLDER, PROGRESS_LABEL,
};
pub use view::task_row::{format_created_date, TaskAction, TaskRow, TaskRowView};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
