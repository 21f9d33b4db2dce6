//! Render models handed to host UIs.
//!
//! # Responsibility
//! - Project controller state into plain, serializable view data.
//! - Keep styling out of core; only behavioral flags are exposed.
//!
//! # Invariants
//! - Views are snapshots; mutating them never touches list state.

pub mod task_list_view;
pub mod task_row;
