//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connections, limiter construction, and
//! the Axum server lifecycle.

use crate::application::rate_limiter::TokenBucket;
use crate::application::services::ShortenerService;
use crate::config::{Config, DbDriver};
use crate::domain::repositories::{UrlRepository, VisitRepository};
use crate::infrastructure::persistence::{InMemoryStore, PgUrlRepository, PgVisitRepository};
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

type Repositories = (Arc<dyn UrlRepository>, Arc<dyn VisitRepository>);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The store selected by `DB_DRIVER` (PostgreSQL pool plus migrations, or in-memory)
/// - The shortening service
/// - The process-wide token bucket
/// - Axum HTTP server, stopped gracefully on Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (urls, visits) = build_store(&config).await?;

    let shortener = Arc::new(ShortenerService::new(urls, visits));
    let limiter = Arc::new(TokenBucket::new(
        config.max_request,
        config.refill_interval(),
    ));

    let state = AppState::new(shortener, limiter, &config.base_url, config.behind_proxy);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
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

async fn build_store(config: &Config) -> Result<Repositories> {
    match config.db_driver {
        DbDriver::Memory => {
            tracing::warn!("Using in-memory store, data will be lost on exit");
            let store = Arc::new(InMemoryStore::new());
            let urls: Arc<dyn UrlRepository> = store.clone();
            let visits: Arc<dyn VisitRepository> = store;
            Ok((urls, visits))
        }
        DbDriver::Postgres => {
            let pool = connect_pool(config).await?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            let pool = Arc::new(pool);
            let urls: Arc<dyn UrlRepository> = Arc::new(PgUrlRepository::new(pool.clone()));
            let visits: Arc<dyn VisitRepository> = Arc::new(PgVisitRepository::new(pool));
            Ok((urls, visits))
        }
    }
}

/// Opens a PostgreSQL pool using the `DB_*` pool settings.
///
/// # Errors
///
/// Returns an error if no connection string is configured or the first
/// connection cannot be established.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set for the postgres store")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received, draining connections");
}
