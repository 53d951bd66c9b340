//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, CORS and tracing middleware
//! - [`routes`] - Public and protected route sets

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
