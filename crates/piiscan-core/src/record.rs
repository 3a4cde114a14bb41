//! Record representation and value coercion

use serde_json::{Map, Value};

use crate::field::FieldKind;

/// A single decoded record: field name to JSON value, in source order
pub type Record = Map<String, Value>;

/// Render a value as the text the detection rules and masks operate on.
///
/// `null` has no text form and is treated like a missing field.
pub fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Whether a value counts as present for fields that qualify on presence alone.
///
/// `null`, `false`, zero and empty strings, arrays and objects do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Coerced text of a recognized field, if the record carries it
pub fn field_text(record: &Record, kind: FieldKind) -> Option<String> {
    record.get(kind.as_str()).and_then(coerce)
}
