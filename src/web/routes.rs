//! Front-end route configuration.

use crate::state::AppState;
use crate::web::handlers::{create_form_handler, index_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Front-end routes.
///
/// The form carries the API key in its body, so these routes check it
/// themselves instead of going through the Bearer middleware.
///
/// # Endpoints
///
/// - `GET  /`         - Creation form (or redirect to `HOME_URL`)
/// - `POST /api/new`  - Form submission
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/new", post(create_form_handler))
}
