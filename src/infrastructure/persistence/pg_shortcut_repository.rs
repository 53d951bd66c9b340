//! PostgreSQL implementation of the shortcut repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Shortcut;
use crate::domain::repositories::ShortcutRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ShortcutRow {
    slug: String,
    url: String,
    uses: i64,
}

impl From<ShortcutRow> for Shortcut {
    fn from(row: ShortcutRow) -> Self {
        Shortcut::new(row.slug, row.url, row.uses)
    }
}

/// PostgreSQL repository for shortcuts.
///
/// Each operation is a single parameterized statement, so row-level locking in
/// PostgreSQL provides the atomicity the trait requires.
pub struct PgShortcutRepository {
    pool: Arc<PgPool>,
}

impl PgShortcutRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Number of stored shortcuts.
    ///
    /// # Errors
    ///
    /// Fails if the `shortcuts` table does not exist.
    pub async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shortcuts")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ShortcutRepository for PgShortcutRepository {
    async fn create_if_absent(&self, url: &str, slug: &str) -> Result<Option<Shortcut>, AppError> {
        let row = sqlx::query_as::<_, ShortcutRow>(
            r#"
            INSERT INTO shortcuts (slug, url)
            VALUES ($1, $2)
            ON CONFLICT (slug) DO NOTHING
            RETURNING slug, url, uses
            "#,
        )
        .bind(slug)
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Shortcut::from))
    }

    async fn resolve_and_count(&self, slug: &str) -> Result<Option<String>, AppError> {
        let url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE shortcuts
            SET uses = uses + 1
            WHERE slug = $1
            RETURNING url
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn delete_and_return(&self, slug: &str) -> Result<Option<Shortcut>, AppError> {
        let row = sqlx::query_as::<_, ShortcutRow>(
            r#"
            DELETE FROM shortcuts
            WHERE slug = $1
            RETURNING slug, url, uses
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Shortcut::from))
    }

    async fn get(&self, slug: &str) -> Result<Option<Shortcut>, AppError> {
        let row = sqlx::query_as::<_, ShortcutRow>(
            r#"
            SELECT slug, url, uses
            FROM shortcuts
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Shortcut::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
