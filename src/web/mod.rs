//! Browser front-end for creating shortcuts.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Front-end route configuration

pub mod handlers;
pub mod routes;
