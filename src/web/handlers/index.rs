//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Template for the creation form.
///
/// Renders `templates/index.html` with API key, URL and optional slug inputs.
/// The API key is remembered in the browser's local storage.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {}

/// Renders the creation form, or redirects to the configured home URL.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> Response {
    match &state.home_url {
        Some(home_url) => (StatusCode::FOUND, [(header::LOCATION, home_url.clone())]).into_response(),
        None => IndexTemplate {}.into_response(),
    }
}
