//! # REST API HTTP Server
//!
//! Axum routes for the catalog endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::model::Recipe;

use super::errors::RestError;
use super::handler::CatalogHandler;
use super::parser::{ListParams, SearchParams};
use super::response::{HealthResponse, PageResponse};

/// REST API server state
pub struct RestServer<H: CatalogHandler> {
    handler: Arc<H>,
}

impl<H: CatalogHandler + 'static> RestServer<H> {
    pub fn new(handler: H) -> Self {
        Self::from_arc(Arc::new(handler))
    }

    pub fn from_arc(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/health", get(health_handler::<H>))
            .route("/api/recipes", get(list_handler::<H>))
            .route("/api/recipes/search", get(search_handler::<H>))
            .route("/api/cuisines", get(cuisines_handler::<H>))
            .with_state(state)
    }
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

/// List recipes handler
async fn list_handler<H: CatalogHandler + 'static>(
    State(server): State<ServerState<H>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<PageResponse<Recipe>>, RestError> {
    let params = ListParams::parse(&query);
    let result = server.handler.list(&params)?;
    Ok(Json(result))
}

/// Search recipes handler
async fn search_handler<H: CatalogHandler + 'static>(
    State(server): State<ServerState<H>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<PageResponse<Recipe>>, RestError> {
    let params = SearchParams::parse(&query);
    let result = server.handler.search(&params)?;
    Ok(Json(result))
}

/// Distinct cuisines handler
async fn cuisines_handler<H: CatalogHandler + 'static>(
    State(server): State<ServerState<H>>,
) -> Result<Json<Vec<String>>, RestError> {
    let result = server.handler.cuisines()?;
    Ok(Json(result))
}

async fn health_handler<H: CatalogHandler + 'static>(
    State(server): State<ServerState<H>>,
) -> Result<Json<HealthResponse>, RestError> {
    let result = server.handler.health()?;
    Ok(Json(result))
}
