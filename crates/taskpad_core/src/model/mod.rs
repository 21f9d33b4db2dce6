//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task entity and its identifier.
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - Deletion removes a task outright; there are no tombstones.

pub mod task;
