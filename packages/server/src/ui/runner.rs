//! Server startup.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{config::ServerConfig, error::ServerError};

use super::{router::build_router, signal::shutdown_signal, state::AppState};

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.addr();
    let state = Arc::new(AppState::new(&config));
    let app = build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
