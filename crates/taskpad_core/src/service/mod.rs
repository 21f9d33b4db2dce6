//! Core use-case services.
//!
//! # Responsibility
//! - Own list state and expose list operations to host layers.
//! - Keep UI/FFI layers free of list bookkeeping.

pub mod stats;
pub mod task_list;
