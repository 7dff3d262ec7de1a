//! Catalog data model

mod recipe;

pub use recipe::{NewRecipe, Recipe, RecipeId};
