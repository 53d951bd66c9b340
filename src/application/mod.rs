//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortcut_service::ShortcutService`] - Shortcut lifecycle: create, resolve, inspect, delete
//! - [`services::auth_service::AuthService`] - Shared-secret authorization

pub mod services;
