//! Flutter bridge for the Taskpad core.

pub mod api;
