use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use taxi_fleet_http::{AppState, create_router};
use taxi_fleet_storage::StorageBackend;
use tokio::signal;

use crate::{BackendKind, open_durable};

pub(crate) async fn run(
    host: String,
    port: u16,
    backend: BackendKind,
    db_path: Option<PathBuf>,
) -> Result<()> {
    let store = match backend {
        BackendKind::Memory => StorageBackend::new_memory(),
        BackendKind::Sqlite => open_durable(db_path).await?,
    };
    tracing::info!(backend = store.kind(), "Fleet backend ready");

    let state = Arc::new(AppState::new(store));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting HTTP server on {}", addr);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        () = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
