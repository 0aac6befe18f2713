//! # HTTP Server
//!
//! Thin axum layer over [`ChatStore`]: routing, CORS, request tracing and
//! bootstrap. All state lives in the store.

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{ChatShelfError, Result};
use crate::storage::ChatStore;

pub mod chat_routes;
pub mod health_routes;
pub mod response;

pub use chat_routes::chat_routes;
pub use health_routes::health_routes;

/// Build the full router: chats, health, welcome
pub fn build_router(store: ChatStore, config: &ServerConfig) -> Router {
    Router::new()
        .merge(health_routes(config.port))
        .merge(chat_routes(store))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins, or any origin when none are configured
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ]);

    if config.cors_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns error if the address cannot be bound or the server fails
pub async fn serve(store: ChatStore, config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ChatShelfError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Storing chats in {}", store.directory().display());
    tracing::info!("Server listening on http://{}", addr);

    let router = build_router(store, config);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ChatShelfError::Server(e.to_string()))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
