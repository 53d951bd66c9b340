//! Form submission handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::entities::NewShortcut;
use crate::error::AppError;
use crate::state::AppState;

/// Fields posted by the creation form.
///
/// An empty `slug` input means "generate one".
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CreateShortcutForm {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub url: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub slug: Option<String>,
}

/// Result page shown after a form submission.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
struct ResultTemplate {
    success: bool,
    message: String,
    slug: Option<String>,
    problems: Vec<String>,
}

impl ResultTemplate {
    fn created(slug: String) -> Self {
        Self {
            success: true,
            message: "Shortcut created successfully!".to_string(),
            slug: Some(slug),
            problems: Vec::new(),
        }
    }

    fn failed(err: &AppError) -> Self {
        let message = match err {
            AppError::Conflict { .. } => "Conflict: Slug already exists.".to_string(),
            other => other.to_error_body().message,
        };

        Self {
            success: false,
            message,
            slug: None,
            problems: problem_lines(&err.public_details()),
        }
    }
}

/// Turns validation details into `"field: message"` lines.
fn problem_lines(details: &Value) -> Vec<String> {
    let Some(fields) = details.as_object() else {
        return Vec::new();
    };

    fields
        .iter()
        .filter_map(|(field, violations)| Some((field, violations.as_array()?)))
        .flat_map(|(field, violations)| {
            violations.iter().filter_map(move |v| {
                v.get("message")
                    .and_then(Value::as_str)
                    .map(|message| format!("{field}: {message}"))
            })
        })
        .collect()
}

/// Creates a shortcut from the HTML form.
///
/// # Endpoint
///
/// `POST /api/new` (form-encoded: `key`, `url`, `slug`)
///
/// # Response Codes
///
/// - **200**: Created, page links to the new shortcut
/// - **400**: Invalid input, page lists every problem
/// - **401**: Wrong API key
/// - **409**: Slug already taken
pub async fn create_form_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateShortcutForm>,
) -> Response {
    if let Err(err) = state.auth_service.authenticate(&form.key) {
        return (err.status(), ResultTemplate::failed(&err)).into_response();
    }

    match state
        .shortcut_service
        .create(NewShortcut::new(form.url, form.slug))
        .await
    {
        Ok(shortcut) => (StatusCode::OK, ResultTemplate::created(shortcut.slug)).into_response(),
        Err(err) => (err.status(), ResultTemplate::failed(&err)).into_response(),
    }
}
