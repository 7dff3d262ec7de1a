//! In-memory recipe store
//!
//! Records live in a single `Arc<Vec<Recipe>>` kept in id order. Readers
//! clone the `Arc` under a short read lock and then work lock-free on an
//! immutable snapshot; a bulk insert swaps in a new vector.

use std::sync::{Arc, RwLock};

use crate::model::{NewRecipe, Recipe, RecipeId};

use super::errors::{StoreError, StoreResult};
use super::RecipeStore;

/// Append-only in-memory store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Arc<Vec<Recipe>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append recipes, assigning each the next id. Returns the assigned ids.
    pub fn insert_all(
        &self,
        recipes: impl IntoIterator<Item = NewRecipe>,
    ) -> StoreResult<Vec<RecipeId>> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("Lock poisoned"))?;

        let mut next: Vec<Recipe> = guard.as_ref().clone();
        let first_id = next.last().map(|r| r.id + 1).unwrap_or(1);

        let mut ids = Vec::new();
        for (recipe, id) in recipes.into_iter().zip(first_id..) {
            next.push(recipe.into_recipe(id));
            ids.push(id);
        }

        *guard = Arc::new(next);
        Ok(ids)
    }
}

impl RecipeStore for InMemoryStore {
    fn snapshot(&self) -> StoreResult<Arc<Vec<Recipe>>> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("Lock poisoned"))?;
        Ok(Arc::clone(&guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> NewRecipe {
        NewRecipe {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ids_assigned_in_insert_order() {
        let store = InMemoryStore::new();
        store.insert_all(vec![titled("a"), titled("b")]).unwrap();
        let snapshot = store.snapshot().unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, 1);
        assert_eq!(snapshot[1].id, 2);
        assert_eq!(snapshot[1].title.as_deref(), Some("b"));
    }

    #[test]
    fn test_insert_all_continues_ids() {
        let store = InMemoryStore::new();
        store.insert_all(vec![titled("a")]).unwrap();
        let ids = store.insert_all(vec![titled("b"), titled("c")]).unwrap();

        assert_eq!(ids, vec![2, 3]);
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_inserts() {
        let store = InMemoryStore::new();
        let before = store.snapshot().unwrap();
        store.insert_all(vec![titled("a")]).unwrap();

        assert!(before.is_empty());
        assert_eq!(store.snapshot().unwrap().len(), 1);
    }
}
