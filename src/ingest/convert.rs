//! Raw record to entity conversion
//!
//! Scalar fields holding the string `"NaN"` (any case) are treated as null.
//! Numeric fields accept JSON numbers or numeric strings. Ingredients,
//! instructions and nutrients are copied through without reinterpretation.

use serde_json::{Map, Value};

use crate::model::NewRecipe;

use super::calories::calories_from_nutrients;

/// Build an entity from one raw source object
pub fn to_new_recipe(record: &Map<String, Value>) -> NewRecipe {
    let nutrients = nutrient_map(record.get("nutrients"));
    let calories = nutrients.as_ref().and_then(calories_from_nutrients);

    NewRecipe {
        title: text(record.get("title")),
        cuisine: text(record.get("cuisine")),
        rating: number(record.get("rating")),
        total_time: minutes(record.get("total_time")),
        prep_time: minutes(record.get("prep_time")),
        cook_time: minutes(record.get("cook_time")),
        description: text(record.get("description")),
        ingredients: item_list(record.get("ingredients")),
        instructions: item_list(record.get("instructions")),
        nutrients,
        serves: text(record.get("serves")),
        calories,
        url: text(record.get("URL").or_else(|| record.get("url"))),
    }
}

/// Drops null and `"NaN"` markers
fn cleaned(value: Option<&Value>) -> Option<&Value> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.eq_ignore_ascii_case("nan") => None,
        v => Some(v),
    }
}

/// JSON text of a non-string scalar, the string itself otherwise
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    match cleaned(value)? {
        v @ (Value::String(_) | Value::Number(_) | Value::Bool(_)) => Some(as_text(v)),
        _ => None,
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    match cleaned(value)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn minutes(value: Option<&Value>) -> Option<i64> {
    number(value).map(|m| m.round() as i64)
}

/// A missing key means an empty list; null or `"NaN"` stays null.
/// A lone scalar or object becomes a one-item list.
fn item_list(value: Option<&Value>) -> Option<Vec<Value>> {
    match value {
        None => Some(Vec::new()),
        Some(Value::Array(items)) => Some(items.clone()),
        Some(v) => cleaned(Some(v)).map(|v| vec![v.clone()]),
    }
}

/// A missing key means an empty map; an explicit null stays null.
fn nutrient_map(value: Option<&Value>) -> Option<Map<String, Value>> {
    match value {
        None => Some(Map::new()),
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => None,
    }
}
