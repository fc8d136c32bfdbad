//! # HTTP Server
//!
//! Builds the full router and serves it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::config::HttpServerConfig;
use super::middleware::log_requests;
use super::product_routes::{product_routes, ProductState};

/// HTTP server for the product catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router();
        Self { config, router }
    }

    /// Build the router: root welcome route, product routes under `/api`,
    /// permissive CORS, and request logging as the outermost layer.
    fn build_router() -> Router {
        let state = Arc::new(ProductState::new());

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(welcome_handler))
            .nest("/api", product_routes(state))
            .layer(cors)
            .layer(middleware::from_fn(log_requests))
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
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address: {}", e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Server is running on http://{}", addr);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Root route, outside the `/api` prefix
async fn welcome_handler() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}
