//! Top-level router combining API and front-end routes.
//!
//! # Route Structure
//!
//! - `GET    /`            - Creation form (public)
//! - `POST   /`            - Create shortcut (Bearer token)
//! - `POST   /api/new`     - Create shortcut from the form (key in body)
//! - `GET    /api/{slug}`  - Inspect shortcut (Bearer token)
//! - `GET    /{slug}`      - Redirect (public)
//! - `DELETE /{slug}`      - Delete shortcut (Bearer token)
//! - `GET    /health`      - Store reachability (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, `GET`/`POST`/`DELETE`/`OPTIONS`
//! - **Authentication** - Bearer API key on protected routes only

use crate::api;
use crate::api::middleware::{auth, cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Authentication is attached with `route_layer`, so it runs only for
/// requests that matched a protected route. `GET /{slug}` and `DELETE /{slug}`
/// share a path but only the latter is authenticated.
pub fn app_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
