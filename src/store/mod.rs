//! Entity store for recipes
//!
//! The query engine only ever reads from the store. Population happens once,
//! before serving, through [`InMemoryStore::insert_all`] (see `crate::ingest`).

mod errors;
mod memory;

use std::sync::Arc;

use crate::model::Recipe;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;

/// Read access to the recipe collection
pub trait RecipeStore: Send + Sync {
    /// Returns an immutable view of every record, ordered by ascending id
    fn snapshot(&self) -> StoreResult<Arc<Vec<Recipe>>>;

    /// Number of stored records
    fn count(&self) -> StoreResult<usize> {
        Ok(self.snapshot()?.len())
    }
}
