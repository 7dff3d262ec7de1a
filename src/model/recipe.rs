//! Recipe entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Store-assigned recipe identifier
pub type RecipeId = u64;

/// A single catalog recipe.
///
/// Every attribute except `id` may be absent. Absent values serialize as
/// `null` so the wire shape is identical for every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique, immutable identifier assigned on insert
    pub id: RecipeId,
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    /// Minutes
    pub total_time: Option<i64>,
    /// Minutes
    pub prep_time: Option<i64>,
    /// Minutes
    pub cook_time: Option<i64>,
    pub description: Option<String>,
    /// Items are kept exactly as loaded, strings or structured entries
    pub ingredients: Option<Vec<Value>>,
    pub instructions: Option<Vec<Value>>,
    /// Nutrient name to amount in source key order, e.g. `"calories": "389 kcal"`
    pub nutrients: Option<Map<String, Value>>,
    pub serves: Option<String>,
    /// Derived from `nutrients["calories"]` at load time
    pub calories: Option<f64>,
    /// Source page of the recipe
    pub url: Option<String>,
}

/// A recipe before the store has assigned it an id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRecipe {
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub total_time: Option<i64>,
    pub prep_time: Option<i64>,
    pub cook_time: Option<i64>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<Value>>,
    pub instructions: Option<Vec<Value>>,
    pub nutrients: Option<Map<String, Value>>,
    pub serves: Option<String>,
    pub calories: Option<f64>,
    pub url: Option<String>,
}

impl NewRecipe {
    /// Attach the store-assigned id
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            title: self.title,
            cuisine: self.cuisine,
            rating: self.rating,
            total_time: self.total_time,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            nutrients: self.nutrients,
            serves: self.serves,
            calories: self.calories,
            url: self.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let recipe = NewRecipe {
            title: Some("Apple Pie".to_string()),
            ..Default::default()
        }
        .into_recipe(7);

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Apple Pie");
        assert_eq!(value["cuisine"], json!(null));
        assert_eq!(value["rating"], json!(null));
        assert_eq!(value["calories"], json!(null));
        assert_eq!(value["url"], json!(null));
        assert_eq!(value.as_object().unwrap().len(), 14);
    }

    #[test]
    fn test_nested_fields_pass_through() {
        let mut nutrients = Map::new();
        nutrients.insert("sodium".to_string(), json!("1 mg"));
        nutrients.insert("calories".to_string(), json!({"amount": 389, "unit": "kcal"}));

        let recipe = NewRecipe {
            ingredients: Some(vec![json!({"qty": "2", "item": "apples"}), json!("1 crust")]),
            nutrients: Some(nutrients),
            ..Default::default()
        }
        .into_recipe(1);

        let text = serde_json::to_string(&recipe).unwrap();
        assert!(text.contains(r#""ingredients":[{"qty":"2","item":"apples"},"1 crust"]"#));
        assert!(text.contains(
            r#""nutrients":{"sodium":"1 mg","calories":{"amount":389,"unit":"kcal"}}"#
        ));
    }
}
