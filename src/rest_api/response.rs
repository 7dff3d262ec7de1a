//! # Response Formatting
//!
//! Envelope types for REST API responses.

use serde::Serialize;

use crate::query::Pagination;

/// One page of results plus paging metadata
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    /// Effective page number
    pub page: usize,
    /// Effective (clamped) page size
    pub limit: usize,
    /// Matches across all pages
    pub total: usize,
    pub pages: usize,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(data: Vec<T>, pagination: Pagination, total: usize) -> Self {
        Self {
            data,
            page: pagination.page,
            limit: pagination.limit,
            total,
            pages: pagination.page_count(total),
        }
    }
}

/// Health check body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub recipes: usize,
}

impl HealthResponse {
    pub fn ok(recipes: usize) -> Self {
        Self {
            status: "ok",
            recipes,
        }
    }
}
