//! Shortcut lifecycle service.

use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::domain::entities::{NewShortcut, Shortcut};
use crate::domain::repositories::ShortcutRepository;
use crate::error::AppError;
use crate::utils::slug_generator::generate_slug;

/// Service for creating, resolving, inspecting and deleting shortcuts.
///
/// Holds no state of its own besides the repository handle. Conflicts on a
/// slug are reported to the caller and never retried here; a caller that
/// wants another attempt submits again and gets a freshly generated slug.
pub struct ShortcutService<R: ShortcutRepository + ?Sized = dyn ShortcutRepository> {
    repository: Arc<R>,
}

impl<R: ShortcutRepository + ?Sized> ShortcutService<R> {
    /// Creates a new shortcut service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates the input and stores a new shortcut.
    ///
    /// When `input.slug` is `None`, a random 6-character slug is generated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every violated rule, before any
    /// storage access.
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, input: NewShortcut) -> Result<Shortcut, AppError> {
        input.validate()?;

        let slug = input.slug.unwrap_or_else(generate_slug);

        match self.repository.create_if_absent(&input.url, &slug).await? {
            Some(shortcut) => {
                tracing::info!(slug = %shortcut.slug, url = %shortcut.url, "Shortcut created");
                Ok(shortcut)
            }
            None => {
                tracing::debug!(%slug, "Slug already taken");
                Err(AppError::conflict(
                    "Slug already exists",
                    json!({ "slug": slug }),
                ))
            }
        }
    }

    /// Resolves a slug to its destination and counts the use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no shortcut has this slug.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        self.repository
            .resolve_and_count(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Returns the current record without counting a use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no shortcut has this slug.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get(&self, slug: &str) -> Result<Shortcut, AppError> {
        self.repository
            .get(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Deletes a shortcut and returns its final state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no shortcut has this slug.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, slug: &str) -> Result<Shortcut, AppError> {
        let shortcut = self
            .repository
            .delete_and_return(slug)
            .await?
            .ok_or_else(|| not_found(slug))?;

        tracing::info!(slug = %shortcut.slug, uses = shortcut.uses, "Shortcut deleted");

        Ok(shortcut)
    }

    /// Returns `true` if the store answers. Failures are logged.
    pub async fn health_check(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = ?e, "Storage health check failed");
                false
            }
        }
    }
}

fn not_found(slug: &str) -> AppError {
    AppError::not_found("Shortcut not found", json!({ "slug": slug }))
}
