//! # Catalog Handler
//!
//! Executes list, search and lookup requests against a recipe store.

use std::sync::Arc;

use crate::model::Recipe;
use crate::query::{distinct_cuisines, Pagination, RecipeQuery};
use crate::store::RecipeStore;

use super::errors::RestResult;
use super::parser::{ListParams, SearchParams};
use super::response::{HealthResponse, PageResponse};

/// Read operations exposed over HTTP
pub trait CatalogHandler: Send + Sync {
    /// Every recipe, best rated first
    fn list(&self, params: &ListParams) -> RestResult<PageResponse<Recipe>>;

    /// Recipes matching every supplied filter, best rated first
    fn search(&self, params: &SearchParams) -> RestResult<PageResponse<Recipe>>;

    /// Distinct cuisines, ascending
    fn cuisines(&self) -> RestResult<Vec<String>>;

    fn health(&self) -> RestResult<HealthResponse>;
}

/// Handler backed by a [`RecipeStore`]
pub struct CatalogService<S: RecipeStore> {
    store: Arc<S>,
}

impl<S: RecipeStore> CatalogService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Run `query` on a fresh snapshot and cut out one page
    fn page(&self, query: &RecipeQuery, pagination: Pagination) -> RestResult<PageResponse<Recipe>> {
        let snapshot = self.store.snapshot()?;
        let result = query.execute(&snapshot);
        let total = result.total();

        let data: Vec<Recipe> = pagination
            .window(&result.records)
            .iter()
            .map(|r| (*r).clone())
            .collect();

        tracing::debug!(
            total,
            page = pagination.page,
            limit = pagination.limit,
            returned = data.len(),
            "catalog query"
        );

        Ok(PageResponse::new(data, pagination, total))
    }
}

impl<S: RecipeStore> CatalogHandler for CatalogService<S> {
    fn list(&self, params: &ListParams) -> RestResult<PageResponse<Recipe>> {
        self.page(&RecipeQuery::new(), params.pagination)
    }

    fn search(&self, params: &SearchParams) -> RestResult<PageResponse<Recipe>> {
        self.page(&params.query, params.pagination)
    }

    fn cuisines(&self) -> RestResult<Vec<String>> {
        let snapshot = self.store.snapshot()?;
        Ok(distinct_cuisines(&snapshot))
    }

    fn health(&self) -> RestResult<HealthResponse> {
        Ok(HealthResponse::ok(self.store.count()?))
    }
}
