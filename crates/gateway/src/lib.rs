//! API Gateway Library
//!
//! This crate exposes the input validators and the status classification
//! table over HTTP.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.bind_addr().parse()?;

    // Create app state
    let state = AppState::new(config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
