//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, database connections, migrations and the Axum
//! server lifecycle.

use crate::config::{Config, StorageType};
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::{MemoryMappingRepository, PgMappingRepository};
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

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured mapping repository (memory, or PostgreSQL with migrations)
/// - The shortening service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    tracing::info!("Storage backend: {}", repository.backend());

    let state = AppState::new(repository);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Constructs the repository selected by `STORAGE_TYPE`.
///
/// # Errors
///
/// Returns an error if postgres storage is selected and the pool cannot be
/// created or migrations fail.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn MappingRepository>> {
    match config.storage_type {
        StorageType::Memory => Ok(Arc::new(MemoryMappingRepository::new())),
        StorageType::Postgres => {
            let pool = connect_pool(config).await?;
            migrate(&pool).await?;
            Ok(Arc::new(PgMappingRepository::new(Arc::new(pool))))
        }
    }
}

/// Opens a PostgreSQL pool using the configured pool settings.
///
/// # Errors
///
/// Returns an error if `database_url` is missing or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for postgres storage")?;

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

/// Applies embedded migrations from `./migrations`.
///
/// # Errors
///
/// Returns an error if any migration fails.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
