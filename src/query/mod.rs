//! Query engine for the recipe catalog
//!
//! # Execution Flow
//!
//! 1. Parse numeric filter values (`filter`) for each field in `field`
//! 2. Combine them with the title and cuisine predicates (`builder`)
//! 3. Filter the store snapshot and order by rating (`sorter`)
//! 4. Cut the requested page and derive page metadata (`pagination`)
//!
//! The distinct cuisine lookup (`distinct`) bypasses all filters.

mod builder;
mod distinct;
mod field;
mod filter;
mod pagination;
mod sorter;

pub use builder::{NumericFilter, QueryResult, RecipeQuery, CUISINE_PARAM, TITLE_PARAM};
pub use distinct::distinct_cuisines;
pub use field::NumericField;
pub use filter::{CompareOp, Comparison, FilterExpr};
pub use pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use sorter::RatingSorter;
