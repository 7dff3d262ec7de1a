//! Source shape normalization
//!
//! Recipe dumps come either as a JSON list or as an object keyed by an
//! arbitrary index. Both collapse to one sequence of raw objects here, so
//! nothing downstream has to care which shape was used.

use serde_json::{Map, Value};

use super::errors::{IngestError, IngestResult};

/// Raw recipe objects plus a count of entries that were not objects
#[derive(Debug, Default)]
pub struct RawRecords {
    pub records: Vec<Map<String, Value>>,
    pub skipped: usize,
}

/// Flatten a parsed source document into raw recipe objects
pub fn normalize(source: Value) -> IngestResult<RawRecords> {
    let items: Vec<Value> = match source {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        other => return Err(IngestError::UnsupportedShape(kind(&other))),
    };

    let mut out = RawRecords::default();
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(record) => out.records.push(record),
            other => {
                tracing::warn!(index, kind = kind(&other), "skipping non-object source item");
                out.skipped += 1;
            }
        }
    }

    Ok(out)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_source() {
        let raw = normalize(json!([{"title": "a"}, {"title": "b"}])).unwrap();
        assert_eq!(raw.records.len(), 2);
        assert_eq!(raw.skipped, 0);
        assert_eq!(raw.records[1]["title"], "b");
    }

    #[test]
    fn test_object_source() {
        let raw = normalize(json!({"0": {"title": "a"}, "1": {"title": "b"}})).unwrap();
        assert_eq!(raw.records.len(), 2);
    }

    #[test]
    fn test_non_objects_skipped() {
        let raw = normalize(json!([{"title": "a"}, "oops", 3, null])).unwrap();
        assert_eq!(raw.records.len(), 1);
        assert_eq!(raw.skipped, 3);
    }

    #[test]
    fn test_scalar_source_rejected() {
        let err = normalize(json!("recipes")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedShape("string")));
    }
}
