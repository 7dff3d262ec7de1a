//! Distinct cuisine lookup

use std::collections::BTreeSet;

use crate::model::Recipe;

/// Sorted, de-duplicated cuisines across `recipes`. Null and empty values
/// are left out.
pub fn distinct_cuisines(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .filter_map(|r| r.cuisine.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
