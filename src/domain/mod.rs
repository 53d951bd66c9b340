//! Domain layer containing the shortcut entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Store trait implemented by the infrastructure layer
//!
//! All correctness under concurrency comes from the atomicity contract of
//! [`repositories::ShortcutRepository`]; nothing here holds in-process locks.

pub mod entities;
pub mod repositories;
