#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use url_shortcuts::domain::repositories::ShortcutRepository;
use url_shortcuts::infrastructure::persistence::{
    InMemoryShortcutRepository, PgShortcutRepository,
};
use url_shortcuts::routes::app_router;
use url_shortcuts::state::AppState;

pub const TEST_API_KEY: &str = "test-api-key";

pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(InMemoryShortcutRepository::new()), None)
}

pub fn create_state_with(
    repository: Arc<dyn ShortcutRepository>,
    home_url: Option<String>,
) -> AppState {
    AppState::new(repository, TEST_API_KEY, home_url)
}

pub fn create_test_app() -> Router {
    app_router(create_test_state())
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app()).unwrap()
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    create_state_with(Arc::new(PgShortcutRepository::new(Arc::new(pool))), None)
}

pub async fn insert_shortcut(pool: &PgPool, slug: &str, url: &str, uses: i64) {
    sqlx::query("INSERT INTO shortcuts (slug, url, uses) VALUES ($1, $2, $3)")
        .bind(slug)
        .bind(url)
        .bind(uses)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn uses_of(pool: &PgPool, slug: &str) -> i64 {
    sqlx::query_scalar("SELECT uses FROM shortcuts WHERE slug = $1")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}
