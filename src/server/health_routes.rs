//! Health and welcome endpoints

use axum::{routing::get, Router};
use chrono::Utc;
use serde::Serialize;

use super::response::PrettyJson;
use crate::storage::codec::format_timestamp;

/// Name reported by the health check
pub const SERVICE_NAME: &str = "chatshelf";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub timestamp: String,
}

/// `GET /` and `GET /health`
pub fn health_routes(port: u16) -> Router {
    Router::new()
        .route("/", get(move || async move { welcome_text(port) }))
        .route("/health", get(health_handler))
}

async fn health_handler() -> PrettyJson<HealthResponse> {
    tracing::info!("Health check requested");
    PrettyJson(HealthResponse {
        service: SERVICE_NAME.to_string(),
        status: "ok".to_string(),
        timestamp: format_timestamp(&Utc::now()),
    })
}

fn welcome_text(port: u16) -> String {
    format!(
        "Welcome to the chatshelf server!\n\
         \n\
         Available endpoints:\n\
         - GET    /health          - Health check\n\
         - GET    /chats           - Get all chats\n\
         - POST   /chats           - Upload a chat\n\
         - GET    /chats/:id       - Get specific chat\n\
         - DELETE /chats/:id       - Delete specific chat\n\
         \n\
         Server is running on port {}\n",
        port
    )
}
