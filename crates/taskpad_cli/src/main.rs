//! Terminal host for the Taskpad core.
//!
//! # Responsibility
//! - Feed stdin lines into the task list controller as host events.
//! - Print the rendered list and toasts after every command.

use clap::Parser;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use taskpad_core::{
    default_log_level, init_logging, EventOutcome, HostEvent, Key, LogNotifier, Notification,
    Notifier, TaskAction, TaskListController, TaskListView, APP_TAGLINE, APP_TITLE,
    EMPTY_STATE_HINT, EMPTY_STATE_TITLE, INPUT_PLACEHOLDER, PROGRESS_LABEL,
};

const PROGRESS_BAR_WIDTH: usize = 20;

#[derive(Debug, Parser)]
#[command(name = "taskpad", version, about = "Keep a todo list in your terminal")]
struct Args {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "TASKPAD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "TASKPAD_LOG_DIR")]
    log_dir: Option<String>,
}

/// Prints toasts inline with the list output.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, notification: &Notification) {
        println!("* {}: {}", notification.title, notification.description);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(String),
    Toggle(usize),
    Delete(usize),
    List,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if let Some(escaped) = trimmed.strip_prefix("::") {
        return Command::Add(format!(":{escaped}"));
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Add(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let index = parts.next().and_then(|value| value.parse::<usize>().ok());
    match (name, index) {
        ("toggle" | "t", Some(index)) => Command::Toggle(index),
        ("delete" | "d", Some(index)) => Command::Delete(index),
        ("list" | "l", None) => Command::List,
        ("help" | "h", None) => Command::Help,
        ("quit" | "q", None) => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// Maps a 1-based row number onto the row's action.
fn row_action(
    view: &TaskListView,
    index: usize,
    make: fn(taskpad_core::TaskId) -> TaskAction,
) -> Option<TaskAction> {
    let row = view.rows().get(index.checked_sub(1)?)?;
    Some(make(row.id))
}

fn render(view: &TaskListView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{APP_TITLE}\n{APP_TAGLINE}\n"));
    if let Some(header) = &view.header {
        out.push_str(&format!("{}\n", header.label()));
    }
    out.push('\n');

    if view.is_empty() {
        out.push_str(&format!("  {EMPTY_STATE_TITLE}\n  {EMPTY_STATE_HINT}\n"));
    }
    for (position, row) in view.rows().iter().enumerate() {
        let mark = if row.completed { "x" } else { " " };
        out.push_str(&format!(
            "{:>3}. [{mark}] {}  ({})\n",
            position + 1,
            row.text,
            row.created_label
        ));
    }

    if let Some(progress) = &view.progress {
        let filled = (progress.ratio * PROGRESS_BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "\n{PROGRESS_LABEL} {}  [{}{}]\n",
            progress.label(),
            "#".repeat(filled),
            "-".repeat(PROGRESS_BAR_WIDTH - filled)
        ));
    }
    out
}

fn help() -> &'static str {
    "Type a task and press Enter to add it.\n\
     :toggle N  mark row N done or open\n\
     :delete N  remove row N\n\
     :list      show the list\n\
     :quit      exit\n\
     Start a task with `::` to add text beginning with `:`."
}

fn setup_logging(args: &Args) {
    let Some(log_dir) = args.log_dir.as_deref() else {
        return;
    };
    let level = args.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args);
    info!("event=cli_start module=cli status=ok");

    let mut list = TaskListController::new(LogNotifier::new(ConsoleNotifier));
    println!("{}", render(&list.view()));
    println!("{}", help());

    let stdin = io::stdin();
    loop {
        print!("{INPUT_PLACEHOLDER} > ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                warn!("event=stdin_read module=cli status=error kind={:?}", err.kind());
                eprintln!("failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        }
        let line = line.trim_end_matches(['\n', '\r']);

        let outcome = match parse_command(line) {
            Command::Add(text) => {
                list.handle(HostEvent::DraftChanged(text));
                list.handle(HostEvent::KeyPressed(Key::Enter))
            }
            Command::Toggle(index) => match row_action(&list.view(), index, TaskAction::Toggle) {
                Some(action) => list.handle(HostEvent::Row(action)),
                None => {
                    println!("no row {index}");
                    continue;
                }
            },
            Command::Delete(index) => match row_action(&list.view(), index, TaskAction::Delete) {
                Some(action) => list.handle(HostEvent::Row(action)),
                None => {
                    println!("no row {index}");
                    continue;
                }
            },
            Command::List => EventOutcome::Ignored,
            Command::Help => {
                println!("{}", help());
                continue;
            }
            Command::Quit => break,
            Command::Unknown(raw) => {
                println!("unknown command `{raw}`; try :help");
                continue;
            }
        };
        if matches!(outcome, EventOutcome::Add(taskpad_core::AddOutcome::Rejected)) {
            continue;
        }
        println!("{}", render(&list.view()));
    }

    info!("event=cli_exit module=cli status=ok");
    ExitCode::SUCCESS
}
