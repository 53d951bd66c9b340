//! Application error type and its HTTP representation.
//!
//! Every failure a caller can observe maps to one [`AppError`] variant:
//!
//! | Variant        | Status | Code           |
//! |----------------|--------|----------------|
//! | `Unauthorized` | 401    | `UNAUTHORIZED` |
//! | `Validation`   | 400    | `ARGUMENTS`    |
//! | `Conflict`     | 409    | `CONFLICT`     |
//! | `NotFound`     | 404    | `NOT_FOUND`    |
//! | `Internal`     | 500    | `UNKNOWN`      |
//!
//! Internal errors are logged with their details and returned to the client
//! with an empty `details` object.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use validator::ValidationErrors;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized { .. } => "UNAUTHORIZED",
            AppError::Validation { .. } => "ARGUMENTS",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Conflict { .. } => "CONFLICT",
            AppError::Internal { .. } => "UNKNOWN",
        }
    }

    /// Details safe to show to a client. Internal details are never exposed.
    pub fn public_details(&self) -> Value {
        match self {
            AppError::Unauthorized { details, .. }
            | AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. } => details.clone(),
            AppError::Internal { .. } => json!({}),
        }
    }

    /// Converts the error into its client-facing body.
    ///
    /// Logs internal errors, including the details that are withheld from the body.
    pub fn to_error_body(&self) -> ErrorBody {
        if let AppError::Internal { message, details } = self {
            tracing::error!(%message, %details, "Internal error");
        }

        let message = match self {
            AppError::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        };

        ErrorBody {
            error: self.code(),
            message,
            details: self.public_details(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.to_error_body();

        if status == StatusCode::UNAUTHORIZED {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], Json(body)).into_response();
        }

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request("Invalid arguments", validation_details(&errors))
    }
}

/// Flattens validator output into `{ field: [{ code, message }, ...] }`.
///
/// Every violated constraint of every field is kept.
pub fn validation_details(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();

    for (field, field_errors) in errors.field_errors() {
        let violations = field_errors
            .iter()
            .map(|e| {
                json!({
                    "code": e.code,
                    "message": e.message.as_deref().unwrap_or(e.code.as_ref()),
                })
            })
            .collect::<Vec<_>>();
        fields.insert(field.to_string(), Value::Array(violations));
    }

    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_code_mapping() {
        let cases = [
            (AppError::unauthorized("x", json!({})), 401, "UNAUTHORIZED"),
            (AppError::bad_request("x", json!({})), 400, "ARGUMENTS"),
            (AppError::not_found("x", json!({})), 404, "NOT_FOUND"),
            (AppError::conflict("x", json!({})), 409, "CONFLICT"),
            (AppError::internal("x", json!({})), 500, "UNKNOWN"),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status().as_u16(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::internal("Database error", json!({ "reason": "connection refused" }));
        let body = err.to_error_body();

        assert_eq!(body.error, "UNKNOWN");
        assert_eq!(body.message, "Internal server error");
        assert_eq!(body.details, json!({}));
    }

    #[test]
    fn test_conflict_keeps_details() {
        let err = AppError::conflict("Slug already exists", json!({ "slug": "abc" }));
        let body = err.to_error_body();

        assert_eq!(body.message, "Slug already exists");
        assert_eq!(body.details["slug"], "abc");
    }

    #[test]
    fn test_unauthorized_response_has_www_authenticate() {
        let response = AppError::unauthorized("Unauthorized", json!({})).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
