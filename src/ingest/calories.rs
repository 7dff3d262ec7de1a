//! Calorie extraction from nutrient text

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

/// Nutrient key holding the calorie text
pub const CALORIES_KEY: &str = "calories";

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(\.\d+)?").expect("calorie pattern is valid"));

/// First numeric token of `text`, e.g. `"389 kcal"` gives `389.0`
pub fn parse_calories(text: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Calories derived from a nutrient map, if it carries a usable entry.
///
/// Non-string entries are searched in their JSON text, so `{"amount": 389}`
/// still yields `389.0`.
pub fn calories_from_nutrients(nutrients: &Map<String, Value>) -> Option<f64> {
    match nutrients.get(CALORIES_KEY)? {
        Value::Null => None,
        Value::String(text) => parse_calories(text),
        other => parse_calories(&other.to_string()),
    }
}
