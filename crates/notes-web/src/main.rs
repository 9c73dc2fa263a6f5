//! Notes Web Server
//!
//! Serves the notes frontend pages and form actions on top of the notes API.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notes_web::{config::WebConfig, routes, state::AppState, ResultExt};

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,notes_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Notes Web");

    let config = WebConfig::load().log("Failed to load configuration")?;

    tracing::info!(
        bind = %config.server.bind,
        port = config.server.port,
        backend = %config.backend.base_url,
        secure_cookies = config.cookies.secure,
        "Configuration loaded"
    );

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .log("Invalid bind address")?;
    let state = AppState::new(config).log("Failed to create application state")?;
    let app = routes::router(Arc::new(state));

    let listener = TcpListener::bind(addr)
        .await
        .log("Failed to bind to address")?;

    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .log("Failed to serve app")?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c()
            .await
            .log("Failed to install Ctrl+C handler")
            .is_err()
        {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .log("Failed to install SIGTERM handler")
        {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
