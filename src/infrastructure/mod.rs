//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - Shortcut store implementations (PostgreSQL and in-memory)

pub mod persistence;
