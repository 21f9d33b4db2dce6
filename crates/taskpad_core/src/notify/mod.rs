//! Transient user-facing notifications.
//!
//! # Responsibility
//! - Define the notification payload shown by host UIs.
//! - Define the fire-and-forget `Notifier` collaborator contract.
//!
//! # Invariants
//! - Core never waits on or inspects the result of showing a message.

pub mod notifier;
