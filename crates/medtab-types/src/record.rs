//! Loosely-typed table record.
//!
//! This module provides the `TableRecord` struct representing one row
//! from a reference table JSON file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single row from a reference table file.
///
/// A record is a raw JSON object. Beyond the code and text fields its
/// table declares, every field is carried through serialization
/// unchanged, so callers receive exactly what the source file contained.
///
/// # Examples
///
/// ```
/// use medtab_types::TableRecord;
///
/// let record: TableRecord = serde_json::from_str(
///     r#"{"code": "A00", "description": "Cólera", "chapter": 1}"#,
/// ).unwrap();
///
/// assert_eq!(record.text("description"), "Cólera");
/// assert_eq!(record.text("missing"), "");
/// assert_eq!(record.get("chapter"), Some(&serde_json::json!(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRecord {
    fields: Map<String, Value>,
}

impl TableRecord {
    /// Creates a record from a raw JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the string value of a field.
    ///
    /// A missing field, or one holding a non-string value, reads as the
    /// empty string. Matching never faults on an irregular row.
    pub fn text(&self, field: &str) -> &str {
        self.fields.get(field).and_then(Value::as_str).unwrap_or("")
    }

    /// Returns the raw JSON value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> TableRecord {
        serde_json::from_value(value).expect("object literal")
    }

    #[test]
    fn test_text_reads_string_fields() {
        let rec = record(json!({"code": "A00", "description": "Cólera"}));
        assert_eq!(rec.text("code"), "A00");
        assert_eq!(rec.text("description"), "Cólera");
    }

    #[test]
    fn test_text_is_empty_for_missing_or_non_string() {
        let rec = record(json!({"chapter": 1, "flags": null}));
        assert_eq!(rec.text("chapter"), "");
        assert_eq!(rec.text("flags"), "");
        assert_eq!(rec.text("absent"), "");
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let source = json!({
            "codigo": "0301010015",
            "nome": "Consulta médica",
            "valor_sh": 10.0,
            "complexidade": "MEDIA COMPLEXIDADE"
        });

        let rec = record(source.clone());
        let back = serde_json::to_value(&rec).unwrap();
        assert_eq!(back, source);
    }
}
