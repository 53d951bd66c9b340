//! API route configuration.

use crate::api::handlers::{
    create_shortcut_handler, delete_shortcut_handler, get_new_shortcut_handler,
    get_shortcut_handler, health_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes protected by API key authentication.
///
/// The caller attaches [`crate::api::middleware::auth`] with `route_layer`.
///
/// # Endpoints
///
/// - `POST   /`            - Create a shortcut
/// - `GET    /api/{slug}`  - Inspect a shortcut without counting a use
/// - `GET    /api/new`     - Same for the slug `new`, whose path the form's `POST` shares
/// - `DELETE /{slug}`      - Delete a shortcut
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_shortcut_handler))
        .route("/api/{slug}", get(get_shortcut_handler))
        .route("/api/new", get(get_new_shortcut_handler))
        .route("/{slug}", delete(delete_shortcut_handler))
}

/// Routes open to everyone.
///
/// # Endpoints
///
/// - `GET /{slug}`  - Redirect to the destination and count the use
/// - `GET /health`  - Store reachability
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
}
