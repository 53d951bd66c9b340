//! Shortcut store implementations.
//!
//! - [`PgShortcutRepository`] - PostgreSQL, one SQL statement per operation
//! - [`InMemoryShortcutRepository`] - process-local `DashMap` for development and tests

pub mod memory_shortcut_repository;
pub mod pg_shortcut_repository;

pub use memory_shortcut_repository::InMemoryShortcutRepository;
pub use pg_shortcut_repository::PgShortcutRepository;
