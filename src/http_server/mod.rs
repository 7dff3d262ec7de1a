//! # HTTP Server Module
//!
//! Binds the catalog REST API to a socket.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/*` - Catalog listing, search and cuisine lookup
//! - everything else - static assets, when a directory is configured

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
