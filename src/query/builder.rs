//! # Query Builder
//!
//! Composes the title, cuisine and numeric predicates of one request into a
//! single plan, then runs it over a store snapshot.

use std::collections::HashMap;

use crate::model::Recipe;

use super::field::NumericField;
use super::filter::{Comparison, FilterExpr};
use super::sorter::RatingSorter;

/// Query parameter carrying the title substring
pub const TITLE_PARAM: &str = "title";

/// Query parameter carrying the exact cuisine
pub const CUISINE_PARAM: &str = "cuisine";

/// A numeric field constraint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericFilter {
    pub field: NumericField,
    pub comparison: Comparison,
}

impl NumericFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.comparison.matches(self.field.value(recipe))
    }
}

/// A set of predicates combined with AND logic.
///
/// An unset predicate places no constraint on its field; it does not require
/// the field to be null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeQuery {
    /// Lowercased title needle
    title: Option<String>,
    cuisine: Option<String>,
    numeric: Vec<NumericFilter>,
}

impl RecipeQuery {
    /// A query matching every recipe
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw query parameters. Unknown keys are ignored and
    /// malformed numeric values leave their field unconstrained.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        params
            .iter()
            .fold(Self::new(), |query, (key, raw)| match key.as_str() {
                TITLE_PARAM => query.title_contains(raw),
                CUISINE_PARAM => query.cuisine_eq(raw),
                other => match (NumericField::from_param(other), FilterExpr::parse(raw)) {
                    (Some(field), FilterExpr::Comparison(comparison)) => {
                        query.numeric(field, comparison)
                    }
                    _ => query,
                },
            })
    }

    /// Case-insensitive substring match on title; empty input is ignored
    pub fn title_contains(mut self, needle: &str) -> Self {
        self.title = (!needle.is_empty()).then(|| needle.to_lowercase());
        self
    }

    /// Exact, case-sensitive cuisine match; empty input is ignored
    pub fn cuisine_eq(mut self, cuisine: &str) -> Self {
        self.cuisine = (!cuisine.is_empty()).then(|| cuisine.to_string());
        self
    }

    /// Constrain a numeric field, replacing any earlier constraint on it.
    /// Constraints stay ordered by field so equal queries compare equal.
    pub fn numeric(mut self, field: NumericField, comparison: Comparison) -> Self {
        self.numeric.retain(|f| f.field != field);
        self.numeric.push(NumericFilter { field, comparison });
        self.numeric.sort_by_key(|f| f.field);
        self
    }

    /// Check a recipe against every predicate
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(needle) = &self.title {
            let hit = recipe
                .title
                .as_deref()
                .is_some_and(|t| contains_folded(t, needle));
            if !hit {
                return false;
            }
        }

        if let Some(cuisine) = &self.cuisine {
            if recipe.cuisine.as_deref() != Some(cuisine.as_str()) {
                return false;
            }
        }

        self.numeric.iter().all(|f| f.matches(recipe))
    }

    /// Filter and order `recipes`. The result holds every match; paging
    /// happens afterwards so `total` is independent of the window.
    pub fn execute<'a>(&self, recipes: &'a [Recipe]) -> QueryResult<'a> {
        let mut records: Vec<&Recipe> = recipes.iter().filter(|r| self.matches(r)).collect();
        RatingSorter::sort(&mut records);
        QueryResult { records }
    }
}

/// Case-insensitive `contains` against an already lowercased needle,
/// folding the haystack one char at a time.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.char_indices().any(|(start, _)| {
        let mut folded = haystack[start..].chars().flat_map(char::to_lowercase);
        needle.chars().all(|c| folded.next() == Some(c))
    })
}

/// Ordered matches of a query
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    pub records: Vec<&'a Recipe>,
}

impl<'a> QueryResult<'a> {
    /// Full match count
    pub fn total(&self) -> usize {
        self.records.len()
    }
}
