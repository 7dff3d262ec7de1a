//! Result ordering
//!
//! Catalog listings are ordered by rating, highest first. Unrated recipes go
//! after every rated one, and equal ratings fall back to ascending id so the
//! same request always pages identically.

use std::cmp::Ordering;

use crate::model::Recipe;

/// Sorts recipes by rating descending, nulls last, id ascending
pub struct RatingSorter;

impl RatingSorter {
    pub fn sort(recipes: &mut [&Recipe]) {
        recipes.sort_by(|a, b| Self::compare(a, b));
    }

    pub fn compare(a: &Recipe, b: &Recipe) -> Ordering {
        let by_rating = match (a.rating, b.rating) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        by_rating.then_with(|| a.id.cmp(&b.id))
    }
}
