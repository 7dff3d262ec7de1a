//! recipe-catalog - a read-only recipe catalog over HTTP
//!
//! Recipes are loaded once from a JSON source into an in-memory store and
//! served through a paginated listing, a filtered search with operator
//! values such as `calories=<400`, and a distinct cuisine lookup.

pub mod cli;
pub mod http_server;
pub mod ingest;
pub mod model;
pub mod observability;
pub mod query;
pub mod rest_api;
pub mod store;
