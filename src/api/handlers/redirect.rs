//! Handler for slug resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its destination URL and counts the use.
///
/// # Endpoint
///
/// `GET /{slug}` (public)
///
/// Counting and lookup happen in one store operation, so every redirect
/// served is counted exactly once.
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.shortcut_service.resolve(&slug).await?;

    tracing::debug!(%slug, %url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
