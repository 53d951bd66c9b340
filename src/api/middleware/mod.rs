//! HTTP middleware for request processing and protection.
//!
//! Provides API key authentication, CORS and request tracing.

pub mod auth;
pub mod cors;
pub mod tracing;
