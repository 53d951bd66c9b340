//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connection with retry, migrations and
//! the Axum server lifecycle including graceful shutdown.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::ShortcutRepository;
use crate::infrastructure::persistence::{InMemoryShortcutRepository, PgShortcutRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured shortcut store (PostgreSQL with migrations, or in-memory)
/// - Axum HTTP server with trailing-slash normalization
///
/// Stops accepting connections on Ctrl-C or SIGTERM and waits for in-flight
/// requests to finish.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let state = AppState::new(repository, &config.api_key, config.home_url.clone());

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Creates the store selected by `STORAGE_BACKEND`.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn ShortcutRepository>> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = connect_database(config).await?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgShortcutRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; shortcuts are lost on restart");
            Ok(Arc::new(InMemoryShortcutRepository::new()))
        }
    }
}

/// Connects the PostgreSQL pool, retrying with exponential backoff.
///
/// # Errors
///
/// Returns the last connection error once `db_connect_retries` attempts fail.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres backend")?;

    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(10))
        .map(jitter)
        .take(config.db_connect_retries.saturating_sub(1));

    let pool = Retry::spawn(strategy, || async {
        options.clone().connect(database_url).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Database connection attempt failed");
        })
    })
    .await
    .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    Ok(pool)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
