//! HTTP server initialization and runtime setup.
//!
//! Builds the key pool and registry, wires them into the router, and runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::UrlRegistry;
use crate::config::Config;
use crate::infrastructure::keygen::RandomKeyPool;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The pooled key generator, filled eagerly
/// - The in-memory URL registry
/// - The Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let keygen = RandomKeyPool::new(config.key_pool_size);
    let registry = UrlRegistry::new(config.short_domain.clone(), keygen);
    tracing::info!(
        "Registry ready, issuing short URLs on http://{}/",
        config.short_domain
    );

    let state = AppState::new(Arc::new(registry));
    let app = app_router(state);

    // Bind by host string so names like `localhost` resolve.
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let addr = listener.local_addr()?;
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

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
