//! Compatibility cleaning for OpenAI Structured Outputs

use serde_json::{Map, Value};

/// Keywords Structured Outputs rejects. `anyOf` is supported and kept.
pub const FORBIDDEN_KEYS: [&str; 14] = [
    "if",
    "then",
    "else",
    "not",
    "allOf",
    "oneOf",
    "patternProperties",
    "additionalItems",
    "contains",
    "propertyNames",
    "const",
    "dependencies",
    "definitions",
    "$defs",
];

/// Strip unsupported keywords at every depth and rewrite `const` as `enum`
///
/// Descends into `properties` values, `items` and `anyOf` elements. The
/// result is a fixed point: cleaning it again changes nothing. Non-object
/// values come back unchanged.
pub fn clean(schema: &Value) -> Value {
    let Value::Object(original) = schema else {
        return schema.clone();
    };

    let mut cleaned: Map<String, Value> = original.clone();

    for key in FORBIDDEN_KEYS {
        cleaned.shift_remove(key);
    }

    if let Some(Value::Object(props)) = cleaned.get_mut("properties") {
        for prop in props.values_mut() {
            *prop = clean(prop);
        }
    }

    if let Some(items) = cleaned.get_mut("items") {
        *items = clean(items);
    }

    if let Some(Value::Array(variants)) = cleaned.get_mut("anyOf") {
        for variant in variants.iter_mut() {
            *variant = clean(variant);
        }
    }

    // Read from the untouched input: `const` is already gone from `cleaned`
    if let Some(constant) = original.get("const") {
        cleaned.insert("enum".to_string(), Value::Array(vec![constant.clone()]));
    }

    Value::Object(cleaned)
}

/// Whether any forbidden keyword survives anywhere `clean` would descend
pub fn has_forbidden_keys(schema: &Value) -> bool {
    let Value::Object(map) = schema else {
        return false;
    };

    if FORBIDDEN_KEYS.iter().any(|key| map.contains_key(*key)) {
        return true;
    }

    let in_properties = match map.get("properties") {
        Some(Value::Object(props)) => props.values().any(has_forbidden_keys),
        _ => false,
    };
    let in_items = map.get("items").is_some_and(has_forbidden_keys);
    let in_any_of = match map.get("anyOf") {
        Some(Value::Array(variants)) => variants.iter().any(has_forbidden_keys),
        _ => false,
    };

    in_properties || in_items || in_any_of
}
