//! Business logic services for the application layer.

pub mod auth_service;
pub mod shortcut_service;

pub use auth_service::AuthService;
pub use shortcut_service::ShortcutService;
