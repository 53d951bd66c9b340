//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`ShortcutRepository`] - Atomic shortcut store operations
//!
//! Implementations live in `crate::infrastructure::persistence`. A mock is
//! generated with `mockall` for service tests.

pub mod shortcut_repository;

pub use shortcut_repository::ShortcutRepository;

#[cfg(test)]
pub use shortcut_repository::MockShortcutRepository;
