//! Normalization of authored JSON Schemas

use crate::config::ConversionOptions;
use serde_json::Value;

/// Top-level keys dropped before anything else runs
pub const METADATA_KEYS: [&str; 4] = ["$schema", "$id", "title", "description"];

/// Rewrite an authored schema to follow the conversion policy
///
/// Works on a copy; `schema` itself is never touched. Metadata goes first,
/// then `additionalProperties` (structured mode only), then `required`
/// (strict mode only). Both policy passes walk `properties` of object nodes
/// and `items` of array nodes and nothing else.
pub fn normalize(schema: &Value, options: &ConversionOptions) -> Value {
    let mut converted = schema.clone();

    if let Value::Object(map) = &mut converted {
        for key in METADATA_KEYS {
            map.shift_remove(key);
        }
    }

    if options.output_mode.is_structured() {
        set_additional_properties(&mut converted, options.additional_properties);
    }

    if options.strict_mode {
        ensure_required(&mut converted);
    }

    converted
}

fn type_is(node: &Value, expected: &str) -> bool {
    node.get("type").and_then(Value::as_str) == Some(expected)
}

fn set_additional_properties(node: &mut Value, allowed: bool) {
    if type_is(node, "object") {
        if let Value::Object(map) = node {
            map.insert("additionalProperties".to_string(), Value::Bool(allowed));

            if let Some(Value::Object(props)) = map.get_mut("properties") {
                for prop in props.values_mut() {
                    set_additional_properties(prop, allowed);
                }
            }
        }
    }

    if type_is(node, "array") {
        if let Some(items) = node.get_mut("items") {
            set_additional_properties(items, allowed);
        }
    }
}

fn ensure_required(node: &mut Value) {
    if type_is(node, "object") {
        if let Value::Object(map) = node {
            let keys: Vec<Value> = match map.get("properties") {
                Some(Value::Object(props)) => props.keys().cloned().map(Value::String).collect(),
                _ => return,
            };

            let needs_fill = match map.get("required") {
                None | Some(Value::Null) => true,
                Some(Value::Array(existing)) => existing.is_empty(),
                Some(_) => false,
            };
            if needs_fill {
                map.insert("required".to_string(), Value::Array(keys));
            }

            if let Some(Value::Object(props)) = map.get_mut("properties") {
                for prop in props.values_mut() {
                    ensure_required(prop);
                }
            }
        }
    }

    if type_is(node, "array") {
        if let Some(items) = node.get_mut("items") {
            ensure_required(items);
        }
    }
}
