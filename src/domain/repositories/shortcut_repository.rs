//! Repository trait for shortcut storage.

use crate::domain::entities::Shortcut;
use crate::error::AppError;
use async_trait::async_trait;

/// The single source of truth for shortcut records.
///
/// Every mutating method must be implemented as one atomic storage operation,
/// never as a read followed by a separate write. Conflicts and missing records
/// are ordinary outcomes returned as `Ok(None)`; only storage failures are
/// errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortcutRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryShortcutRepository`] - process-local map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortcutRepository: Send + Sync {
    /// Inserts a record with `uses = 0` unless `slug` is already taken.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Shortcut))` with the stored record on success
    /// - `Ok(None)` if the slug exists; the existing record is left untouched
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create_if_absent(&self, url: &str, slug: &str) -> Result<Option<Shortcut>, AppError>;

    /// Increments `uses` by one and returns the destination URL, in one step.
    ///
    /// Returns `Ok(None)` and changes nothing if no record matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn resolve_and_count(&self, slug: &str) -> Result<Option<String>, AppError>;

    /// Removes the record and returns it as it was just before deletion.
    ///
    /// Returns `Ok(None)` if no record matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_and_return(&self, slug: &str) -> Result<Option<Shortcut>, AppError>;

    /// Reads the current record without touching `uses`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get(&self, slug: &str) -> Result<Option<Shortcut>, AppError>;

    /// Checks that the storage backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
