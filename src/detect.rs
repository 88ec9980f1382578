//! Input classification
//!
//! Decides whether a parsed document is sample data or a JSON Schema. This
//! is a keyword heuristic and nothing more: a data document whose top level
//! has both `title` and `description` fields is classified as a schema.

use crate::types::InputKind;
use serde_json::Value;

/// Top-level keys that suggest a schema document
pub const SCHEMA_INDICATORS: [&str; 14] = [
    "$schema",
    "type",
    "properties",
    "required",
    "description",
    "title",
    "$id",
    "definitions",
    "$defs",
    "items",
    "enum",
    "anyOf",
    "oneOf",
    "allOf",
];

/// Indicator count at which a document is treated as a schema
const INDICATOR_THRESHOLD: usize = 2;

/// Classify a parsed document. Arrays and primitives are always data.
///
/// Rules, first match wins:
/// 1. `type` and `properties` both set
/// 2. `$schema` set
/// 3. two or more indicator keys present
pub fn classify(value: &Value) -> InputKind {
    let Value::Object(map) = value else {
        return InputKind::Data;
    };

    if map.get("type").is_some_and(is_truthy) && map.get("properties").is_some_and(is_truthy) {
        return InputKind::Schema;
    }

    if map.get("$schema").is_some_and(is_truthy) {
        return InputKind::Schema;
    }

    let indicator_count = SCHEMA_INDICATORS
        .iter()
        .filter(|key| map.contains_key(**key))
        .count();
    if indicator_count >= INDICATOR_THRESHOLD {
        return InputKind::Schema;
    }

    InputKind::Data
}

/// Loose truthiness: null, false, 0 and "" are unset; containers always count
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        // Out-of-range magnitudes have no f64 and count as infinite
        Value::Number(n) => !n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
