//! Utility functions shared across layers.
//!
//! - [`slug_generator`] - Slug generation and slug rules
//! - [`key_generator`] - Random API keys for operators

pub mod key_generator;
pub mod slug_generator;
