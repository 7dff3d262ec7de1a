//! # Recipe Ingestion
//!
//! Loads a JSON recipe dump into the store before the service starts.
//!
//! 1. Parse the document
//! 2. Normalize list/object shapes into raw objects (`normalize`)
//! 3. Convert each object, cleaning `"NaN"` markers and deriving
//!    calories from the nutrient text (`convert`, `calories`)
//! 4. Append to the store, which assigns ids in source order

mod calories;
mod convert;
mod errors;
mod normalize;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::model::NewRecipe;
use crate::store::InMemoryStore;

pub use calories::{calories_from_nutrients, parse_calories, CALORIES_KEY};
pub use convert::to_new_recipe;
pub use errors::{IngestError, IngestResult};
pub use normalize::{normalize, RawRecords};

/// Converted recipes ready for insertion
#[derive(Debug, Default)]
pub struct ParsedSource {
    pub recipes: Vec<NewRecipe>,
    /// Source entries that were not objects
    pub skipped: usize,
}

/// Outcome of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Convert an already-parsed source document
pub fn from_value(source: Value) -> IngestResult<ParsedSource> {
    let raw = normalize(source)?;
    Ok(ParsedSource {
        recipes: raw.records.iter().map(to_new_recipe).collect(),
        skipped: raw.skipped,
    })
}

/// Read and parse a source file
pub fn read_source(path: &Path) -> IngestResult<ParsedSource> {
    let reader = BufReader::new(File::open(path)?);
    from_value(serde_json::from_reader(reader)?)
}

/// Append parsed recipes to `store`
pub fn load_into(store: &InMemoryStore, source: ParsedSource) -> IngestResult<IngestReport> {
    let skipped = source.skipped;
    let ids = store.insert_all(source.recipes)?;

    Ok(IngestReport {
        loaded: ids.len(),
        skipped,
    })
}

/// Read `path` and append its recipes to `store`
pub fn load_file(path: &Path, store: &InMemoryStore) -> IngestResult<IngestReport> {
    let report = load_into(store, read_source(path)?)?;
    tracing::info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        "recipe source loaded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecipeStore;
    use std::fs;
    use tempfile::TempDir;

    fn parse(text: &str) -> IngestResult<ParsedSource> {
        from_value(serde_json::from_str(text)?)
    }

    #[test]
    fn test_parse_and_load() {
        let source = r#"[
            {"title": "Apple Pie", "rating": 4.8, "nutrients": {"calories": "389 kcal"}},
            "not a recipe",
            {"title": "NaN", "rating": "NaN"}
        ]"#;

        let store = InMemoryStore::new();
        let report = load_into(&store, parse(source).unwrap()).unwrap();

        assert_eq!(report, IngestReport { loaded: 2, skipped: 1 });

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot[0].id, 1);
        assert_eq!(snapshot[0].calories, Some(389.0));
        assert_eq!(snapshot[1].id, 2);
        assert_eq!(snapshot[1].title, None);
    }

    #[test]
    fn test_object_source_keeps_file_order() {
        let source = r#"{"10": {"title": "first"}, "2": {"title": "second"}}"#;
        let parsed = parse(source).unwrap();

        assert_eq!(parsed.recipes[0].title.as_deref(), Some("first"));
        assert_eq!(parsed.recipes[1].title.as_deref(), Some("second"));
    }

    #[test]
    fn test_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("recipes.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(read_source(&path), Err(IngestError::InvalidJson(_))));
    }

    #[test]
    fn test_load_file_keeps_nested_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("recipes.json");
        fs::write(
            &path,
            r#"{"0": {"title": "Apple Pie",
                      "ingredients": [{"qty": "2", "item": "apples"}],
                      "nutrients": {"sodium": "1 mg", "calories": "389 kcal"}}}"#,
        )
        .unwrap();

        let store = InMemoryStore::new();
        let report = load_file(&path, &store).unwrap();
        assert_eq!(report, IngestReport { loaded: 1, skipped: 0 });

        let snapshot = store.snapshot().unwrap();
        let text = serde_json::to_string(&snapshot[0]).unwrap();
        assert!(text.contains(r#""ingredients":[{"qty":"2","item":"apples"}]"#));
        assert!(text.contains(r#""nutrients":{"sodium":"1 mg","calories":"389 kcal"}"#));
        assert_eq!(snapshot[0].calories, Some(389.0));
    }

    #[test]
    fn test_missing_file() {
        let result = read_source(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(IngestError::Io(_))));
    }
}
