//! Core domain entities.
//!
//! - [`Shortcut`] - A stored slug → URL mapping with its use counter
//! - [`NewShortcut`] - Caller input for creating a shortcut, validated before storage

pub mod shortcut;

pub use shortcut::{NewShortcut, Shortcut};
