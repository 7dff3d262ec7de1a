//! Filterable numeric fields
//!
//! Query parameter names resolve to a fixed set of typed accessors.

use crate::model::Recipe;

/// Numeric recipe fields that accept operator filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericField {
    Calories,
    Rating,
    TotalTime,
}

impl NumericField {
    /// Every filterable field, in the order filters are applied
    pub const ALL: [NumericField; 3] = [
        NumericField::Calories,
        NumericField::Rating,
        NumericField::TotalTime,
    ];

    /// Query parameter name for this field
    pub fn param_name(&self) -> &'static str {
        match self {
            NumericField::Calories => "calories",
            NumericField::Rating => "rating",
            NumericField::TotalTime => "total_time",
        }
    }

    /// Resolve a query parameter name; matching is exact
    pub fn from_param(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.param_name() == name)
    }

    /// Read the field from a recipe, widened to `f64`
    pub fn value(&self, recipe: &Recipe) -> Option<f64> {
        match self {
            NumericField::Calories => recipe.calories,
            NumericField::Rating => recipe.rating,
            NumericField::TotalTime => recipe.total_time.map(|minutes| minutes as f64),
        }
    }
}
