mod app;
mod config;
mod routes;
mod state;

use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data_path = config::data_path();
    let state = match AppState::load(&data_path).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, path = %data_path.display(), "failed to load map data");
            return;
        }
    };
    tracing::info!(
        countries = state.country_count,
        path = %data_path.display(),
        "Map data loaded"
    );

    let static_dir = config::static_dir();
    let app = app::build_app(state, &static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::port()));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind listener");
            return;
        }
    };
    tracing::info!(%addr, static_dir = %static_dir.display(), "pinmap-server listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::warn!(error = %e, "failed to install SIGTERM handler"),
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
