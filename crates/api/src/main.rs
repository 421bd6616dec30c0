use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use harva_db::store::{ContentStore, MemoryStore, PgStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use harva_api::bootstrap::ensure_admin;
use harva_api::config::{ServerConfig, StoreBackend};
use harva_api::router::build_app_router;
use harva_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harva_api=debug,harva_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = config.store_backend.name(),
        "Loaded server configuration",
    );

    // --- Store ---
    let (store, pool): (Arc<dyn ContentStore>, _) = match &config.store_backend {
        StoreBackend::Postgres { database_url } => {
            let pool = harva_db::create_pool(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connection pool created");

            harva_db::health_check(&pool)
                .await
                .context("Database health check failed")?;
            tracing::info!("Database health check passed");

            harva_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            (Arc::new(PgStore::new(pool.clone())) as Arc<dyn ContentStore>, Some(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; content is lost on shutdown");
            (Arc::new(MemoryStore::new()) as Arc<dyn ContentStore>, None)
        }
    };

    // --- Admin bootstrap ---
    if let Some(admin) = &config.admin {
        ensure_admin(store.as_ref(), admin)
            .await
            .map_err(|e| anyhow::anyhow!("Admin bootstrap failed: {e}"))?;
    }

    // --- App state ---
    let state = AppState {
        store,
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config)?;

    // --- Start server ---
    let host = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());
    let server = tokio::spawn(async move { server.await });

    // The server future resolves once every connection has drained; bound
    // that wait after a signal has arrived.
    tokio::select! {
        result = server => {
            result.context("Server task failed")?.context("Server error")?;
        }
        () = async {
            shutdown_signal().await;
            tokio::time::sleep(drain).await;
        } => {
            tracing::warn!(?drain, "Shutdown drain timed out, closing remaining connections");
        }
    }

    // --- Post-shutdown cleanup ---
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
