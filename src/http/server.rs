//! # HTTP Server
//!
//! Combines the app routes, the health check, the envelope-shaped fallback,
//! and the CORS layer into one router, and drives it over a TCP listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::http::config::HttpServerConfig;
use crate::http::response::ErrorResponse;
use crate::http::routes::{app_routes, AppState};
use crate::observability::Logger;
use crate::store::AppStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Health check route at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}

/// Fallback for unmatched routes, keeping the envelope shape everywhere.
async fn fallback_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found")),
    )
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        // No origins configured: permissive
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let mut origins: Vec<HeaderValue> = Vec::new();
        for origin in &config.cors_origins {
            match origin.parse() {
                Ok(value) => origins.push(value),
                Err(_) => Logger::warn("CORS_ORIGIN_SKIPPED", &[("origin", origin)]),
            }
        }

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// HTTP server for the app registry
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given registry state
    pub fn new<S: AppStore + 'static>(config: HttpServerConfig, state: Arc<AppState<S>>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router<S: AppStore + 'static>(
        config: &HttpServerConfig,
        state: Arc<AppState<S>>,
    ) -> Router {
        let cors = cors_layer(config);

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // App registry under /api/apps
            .nest("/api/apps", app_routes(state))
            // Everything else answers with the envelope
            .fallback(fallback_handler)
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address: {err}"),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let addr_text = addr.to_string();
        Logger::info("SERVER_LISTENING", &[("addr", addr_text.as_str())]);
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn server_with_config(config: HttpServerConfig) -> HttpServer {
        let state = Arc::new(AppState::new(MemoryStore::new()));
        HttpServer::new(config, state)
    }

    #[test]
    fn test_server_socket_addr() {
        let server = server_with_config(HttpServerConfig::default());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = server_with_config(HttpServerConfig::with_port(9090));
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds() {
        let server = server_with_config(HttpServerConfig::default());
        let _router = server.router();
    }

    #[test]
    fn test_router_builds_with_configured_origins() {
        let config = HttpServerConfig {
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "bad\norigin".to_string(),
            ],
            ..Default::default()
        };
        let _router = server_with_config(config).router();
    }
}
