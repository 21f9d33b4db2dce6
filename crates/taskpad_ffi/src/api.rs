//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task list session to Dart via FRB.
//! - Flatten core outcomes into simple response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One task list session exists per process.
//! - Calls are sequential; the mutex only satisfies `static` bounds.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use taskpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_task_id,
    ping as ping_inner, AddOutcome, DeleteOutcome, Notification, Notifier, QueueNotifier,
    TaskListController, TaskListView, TaskRowView, ToggleOutcome, EMPTY_STATE_HINT,
    EMPTY_STATE_TITLE,
};

type Session = TaskListController<QueueNotifier>;

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One task row as shown by the Flutter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowItem {
    /// Stable task ID in string form.
    pub task_id: String,
    pub text: String,
    pub completed: bool,
    /// Local `M/D/YYYY` creation date.
    pub created_label: String,
}

/// Full screen snapshot for the Flutter host.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListResponse {
    pub draft_text: String,
    /// Rows most recent first; empty when the placeholder is shown.
    pub rows: Vec<TaskRowItem>,
    /// `None` when the list is empty.
    pub header_label: Option<String>,
    /// `None` when the list is empty.
    pub progress_percent: Option<u8>,
    /// Unrounded bar fill in `[0, 1]`.
    pub progress_ratio: Option<f64>,
    /// Placeholder lines, set only for an empty list.
    pub empty_state: Option<Vec<String>>,
}

/// Generic action response envelope for task commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the command changed the list.
    pub ok: bool,
    /// Affected task ID when one is known.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: String) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Toast payload drained by the host after each command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastItem {
    /// `task_added|task_deleted`.
    pub kind: String,
    pub title: String,
    pub description: String,
}

/// Drops all tasks and the draft, starting a fresh session.
#[flutter_rust_bridge::frb(sync)]
pub fn session_reset() -> TaskListResponse {
    let mut session = lock_session();
    *session = Session::new(QueueNotifier::new());
    to_list_response(&session.view())
}

/// Binds the input field text.
#[flutter_rust_bridge::frb(sync)]
pub fn task_set_draft(text: String) -> TaskListResponse {
    let mut session = lock_session();
    session.set_draft(text);
    to_list_response(&session.view())
}

/// Submits the current draft (button click or Enter).
#[flutter_rust_bridge::frb(sync)]
pub fn task_submit() -> TaskActionResponse {
    submit_in(&mut lock_session())
}

/// Toggles completion of one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(task_id: String) -> TaskActionResponse {
    toggle_in(&mut lock_session(), &task_id)
}

/// Deletes one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(task_id: String) -> TaskActionResponse {
    delete_in(&mut lock_session(), &task_id)
}

/// Returns the current screen snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_view() -> TaskListResponse {
    to_list_response(&lock_session().view())
}

/// Returns and clears pending toasts, oldest first.
#[flutter_rust_bridge::frb(sync)]
pub fn drain_notifications() -> Vec<ToastItem> {
    drain_in(&lock_session())
}

fn lock_session() -> MutexGuard<'static, Session> {
    let session = SESSION.get_or_init(|| Mutex::new(Session::new(QueueNotifier::new())));
    session.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn submit_in(session: &mut Session) -> TaskActionResponse {
    match session.add_task() {
        AddOutcome::Added(id) => TaskActionResponse::success("Task added.", id.to_string()),
        AddOutcome::Rejected => TaskActionResponse::failure("Task text is empty."),
    }
}

fn toggle_in(session: &mut Session, task_id: &str) -> TaskActionResponse {
    let id = match parse_task_id(task_id) {
        Ok(id) => id,
        Err(err) => return TaskActionResponse::failure(format!("task_toggle failed: {err}")),
    };
    match session.toggle_task(id) {
        ToggleOutcome::Toggled { id, completed } => {
            let message = if completed {
                "Task completed."
            } else {
                "Task reopened."
            };
            TaskActionResponse::success(message, id.to_string())
        }
        ToggleOutcome::NotFound => TaskActionResponse::failure(format!("task not found: {id}")),
    }
}

fn delete_in(session: &mut Session, task_id: &str) -> TaskActionResponse {
    let id = match parse_task_id(task_id) {
        Ok(id) => id,
        Err(err) => {
            // A string that can't name a task is just another absent id.
            if session.options().notify_on_missing_delete {
                session.notifier().show(&Notification::task_deleted());
            }
            return TaskActionResponse::failure(format!("task_delete failed: {err}"));
        }
    };
    match session.delete_task(id) {
        DeleteOutcome::Deleted(task) => {
            TaskActionResponse::success("Task deleted.", task.id().to_string())
        }
        DeleteOutcome::NotFound => TaskActionResponse::failure(format!("task not found: {id}")),
    }
}

fn drain_in(session: &Session) -> Vec<ToastItem> {
    session
        .notifier()
        .drain()
        .into_iter()
        .map(to_toast_item)
        .collect()
}

fn to_list_response(view: &TaskListView) -> TaskListResponse {
    TaskListResponse {
        draft_text: view.draft_text.clone(),
        rows: view.rows().iter().map(to_row_item).collect(),
        header_label: view.header.as_ref().map(|header| header.label()),
        progress_percent: view.progress.as_ref().map(|progress| progress.percent),
        progress_ratio: view.progress.as_ref().map(|progress| progress.ratio),
        empty_state: view.is_empty().then(|| {
            vec![EMPTY_STATE_TITLE.to_string(), EMPTY_STATE_HINT.to_string()]
        }),
    }
}

fn to_row_item(row: &TaskRowView) -> TaskRowItem {
    TaskRowItem {
        task_id: row.id.to_string(),
        text: row.text.clone(),
        completed: row.completed,
        created_label: row.created_label.clone(),
    }
}

fn to_toast_item(notification: Notification) -> ToastItem {
    ToastItem {
        kind: notification.kind.as_str().to_string(),
        title: notification.title,
        description: notification.description,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, delete_in, drain_in, drain_notifications, init_logging, ping,
        session_reset, submit_in, task_delete, task_list_view, task_set_draft, task_submit,
        task_toggle, to_list_response, toggle_in, Session,
    };
    use taskpad_core::{QueueNotifier, SystemClock, TaskListOptions};

    fn session() -> Session {
        Session::new(QueueNotifier::new())
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn submit_rejects_blank_draft() {
        let mut session = session();
        session.set_draft("   ");
        let response = submit_in(&mut session);
        assert!(!response.ok);
        assert_eq!(response.task_id, None);
        assert!(drain_in(&session).is_empty());
    }

    #[test]
    fn submit_toggle_delete_flow() {
        let mut session = session();
        session.set_draft("Buy milk");
        let added = submit_in(&mut session);
        assert!(added.ok, "{}", added.message);
        let task_id = added.task_id.expect("submit should return task_id");

        let toggled = toggle_in(&mut session, &task_id);
        assert!(toggled.ok);
        assert_eq!(toggled.message, "Task completed.");

        let view = to_list_response(&session.view());
        assert_eq!(view.rows.len(), 1);
        assert!(view.rows[0].completed);
        assert_eq!(view.header_label.as_deref(), Some("1 of 1 tasks completed"));
        assert_eq!(view.progress_percent, Some(100));
        assert_eq!(view.empty_state, None);

        let deleted = delete_in(&mut session, &task_id);
        assert!(deleted.ok);

        let view = to_list_response(&session.view());
        assert!(view.rows.is_empty());
        assert_eq!(view.progress_percent, None);
        assert_eq!(
            view.empty_state.as_deref().map(|lines| lines[0].as_str()),
            Some("No tasks yet")
        );

        let kinds: Vec<String> = drain_in(&session).into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec!["task_added", "task_deleted"]);
    }

    #[test]
    fn malformed_ids_are_reported() {
        let mut session = session();
        let response = toggle_in(&mut session, "not-a-uuid");
        assert!(!response.ok);
        assert!(response.message.contains("invalid task id"));

        assert!(drain_in(&session).is_empty());
    }

    #[test]
    fn delete_malformed_id_toasts_like_unknown_id() {
        let mut session = session();
        for raw in ["", "1700000000000", "11111111-2222-4333-8444-555555555555"] {
            let response = delete_in(&mut session, raw);
            assert!(!response.ok, "delete of `{raw}` should report failure");
            let toasts = drain_in(&session);
            assert_eq!(toasts.len(), 1, "delete of `{raw}` should toast once");
            assert_eq!(toasts[0].kind, "task_deleted");
        }
    }

    #[test]
    fn delete_malformed_id_is_silent_when_disabled() {
        let mut session = Session::with_parts(
            QueueNotifier::new(),
            SystemClock,
            TaskListOptions {
                notify_on_missing_delete: false,
            },
        );
        let response = delete_in(&mut session, "1700000000000");
        assert!(!response.ok);
        assert!(drain_in(&session).is_empty());
    }

    // Only test in this crate that touches the process-wide session.
    #[test]
    fn exported_calls_share_one_session() {
        let fresh = session_reset();
        assert!(fresh.rows.is_empty());
        assert!(fresh.empty_state.is_some());
        drain_notifications();

        let drafted = task_set_draft("  Walk dog ".to_string());
        assert_eq!(drafted.draft_text, "  Walk dog ");

        let added = task_submit();
        assert!(added.ok, "{}", added.message);
        let task_id = added.task_id.expect("submit should return task_id");

        let toggled = task_toggle(task_id.clone());
        assert!(toggled.ok, "{}", toggled.message);

        let view = task_list_view();
        assert_eq!(view.draft_text, "");
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].task_id, task_id);
        assert_eq!(view.rows[0].text, "Walk dog");
        assert_eq!(view.progress_percent, Some(100));

        let deleted = task_delete(task_id);
        assert!(deleted.ok, "{}", deleted.message);

        let kinds: Vec<String> = drain_notifications().into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec!["task_added", "task_deleted"]);
        assert!(session_reset().rows.is_empty());
    }

    #[test]
    fn delete_unknown_id_fails_but_still_toasts() {
        let mut session = session();
        let response = delete_in(&mut session, "11111111-2222-4333-8444-555555555555");
        assert!(!response.ok);
        assert_eq!(drain_in(&session).len(), 1);
    }
}
