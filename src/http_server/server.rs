//! # HTTP Server
//!
//! Wraps the catalog router with CORS, request tracing and optional static
//! asset serving, and binds it to a socket.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::rest_api::{CatalogHandler, RestServer};

use super::config::HttpServerConfig;

/// HTTP server for the recipe catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server for `handler` with the given configuration
    pub fn with_config<H: CatalogHandler + 'static>(config: HttpServerConfig, handler: Arc<H>) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    fn build_router<H: CatalogHandler + 'static>(config: &HttpServerConfig, handler: Arc<H>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let mut router = RestServer::from_arc(handler).router();

        // Index page and assets for the browser front end
        if let Some(dir) = &config.static_dir {
            router = router.fallback_service(ServeDir::new(dir));
        }

        router.layer(TraceLayer::new_for_http()).layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(address = %addr, "recipe catalog listening");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
