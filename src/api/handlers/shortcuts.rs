//! Handlers for shortcut management endpoints (create, inspect, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::dto::shortcut::{CreateShortcutRequest, ShortcutResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Slug that collides with the form endpoint `/api/new`.
const FORM_PATH_SLUG: &str = "new";

/// Creates a shortcut.
///
/// # Endpoint
///
/// `POST /` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "slug": "my-link" }
/// ```
///
/// `slug` is optional; a random 6-character slug is generated when omitted.
///
/// # Response
///
/// ```json
/// { "slug": "my-link", "url": "https://example.com", "uses": 0 }
/// ```
///
/// # Errors
///
/// - 400 `ARGUMENTS` listing every invalid field
/// - 409 `CONFLICT` if the slug is taken
pub async fn create_shortcut_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortcutRequest>, JsonRejection>,
) -> Result<Json<ShortcutResponse>, AppError> {
    let Json(payload) = payload?;

    let shortcut = state.shortcut_service.create(payload.into()).await?;

    Ok(Json(shortcut.into()))
}

/// Returns a shortcut record without counting a use.
///
/// # Endpoint
///
/// `GET /api/{slug}` (Bearer token required)
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
pub async fn get_shortcut_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortcutResponse>, AppError> {
    let shortcut = state.shortcut_service.get(&slug).await?;

    Ok(Json(shortcut.into()))
}

/// Returns the shortcut whose slug is `new`.
///
/// # Endpoint
///
/// `GET /api/new` (Bearer token required)
///
/// The form owns the static `/api/new` path for `POST`, which takes priority
/// over `/api/{slug}`, so the lookup for this one slug is routed here.
pub async fn get_new_shortcut_handler(
    State(state): State<AppState>,
) -> Result<Json<ShortcutResponse>, AppError> {
    let shortcut = state.shortcut_service.get(FORM_PATH_SLUG).await?;

    Ok(Json(shortcut.into()))
}

/// Deletes a shortcut and returns the record as it was before deletion.
///
/// # Endpoint
///
/// `DELETE /{slug}` (Bearer token required)
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
pub async fn delete_shortcut_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortcutResponse>, AppError> {
    let shortcut = state.shortcut_service.delete(&slug).await?;

    Ok(Json(shortcut.into()))
}
