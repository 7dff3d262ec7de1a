//! # Catalog REST API
//!
//! Read-only HTTP endpoints over the recipe store:
//!
//! - `GET /api/recipes` - paginated listing, best rated first
//! - `GET /api/recipes/search` - title, cuisine and numeric operator filters
//! - `GET /api/cuisines` - distinct cuisines
//! - `GET /health` - liveness and record count

pub mod errors;
pub mod handler;
pub mod parser;
pub mod response;
pub mod server;

pub use errors::{RestError, RestResult};
pub use handler::{CatalogHandler, CatalogService};
pub use parser::{ListParams, SearchParams};
pub use response::{HealthResponse, PageResponse};
pub use server::RestServer;
