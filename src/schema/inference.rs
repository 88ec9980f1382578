//! Schema synthesis from sample JSON values

use super::types::{JsonType, Properties, SchemaFragment};
use crate::config::ConversionOptions;
use serde_json::Value;

/// Map a raw JSON value to the type it is declared as
///
/// `null` has no type of its own here; it is declared as a string and left
/// out of `required` by the synthesizer unless strict mode is on.
pub fn infer_type(value: &Value) -> JsonType {
    match value {
        Value::Null => JsonType::String,
        Value::Array(_) => JsonType::Array,
        Value::Object(_) => JsonType::Object,
        Value::String(_) => JsonType::String,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                JsonType::Integer
            } else if n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0) {
                // 1.0 carries no fractional part
                JsonType::Integer
            } else {
                JsonType::Number
            }
        }
        Value::Bool(_) => JsonType::Boolean,
    }
}

/// Builds schema fragments from sample data under a fixed set of options
#[derive(Debug, Clone, Copy)]
pub struct SchemaSynthesizer<'a> {
    options: &'a ConversionOptions,
}

impl<'a> SchemaSynthesizer<'a> {
    pub fn new(options: &'a ConversionOptions) -> Self {
        Self { options }
    }

    /// Synthesize a fragment for any JSON value
    pub fn synthesize(&self, value: &Value) -> SchemaFragment {
        match value {
            Value::Object(map) => self.synthesize_object(map),
            Value::Array(arr) => SchemaFragment::array(self.synthesize_items(arr)),
            other => SchemaFragment::new(infer_type(other)),
        }
    }

    fn synthesize_object(&self, map: &serde_json::Map<String, Value>) -> SchemaFragment {
        let mut properties = Properties::new();
        let mut required = Vec::new();

        for (key, val) in map {
            properties.insert(key.clone(), self.synthesize(val));

            if self.options.strict_mode || !val.is_null() {
                required.push(key.clone());
            }
        }

        let fragment = SchemaFragment::object(properties).with_required(required);

        if self.options.output_mode.is_structured() {
            fragment.with_additional_properties(self.options.additional_properties)
        } else {
            fragment
        }
    }

    /// Item schema from the first element only. Later elements are never
    /// looked at, so heterogeneous arrays are declared by their head.
    fn synthesize_items(&self, arr: &[Value]) -> SchemaFragment {
        match arr.first() {
            None => SchemaFragment::new(JsonType::String),
            Some(first @ Value::Object(_)) => self.synthesize(first),
            Some(first) => SchemaFragment::new(infer_type(first)),
        }
    }
}

/// Synthesize a schema fragment from sample data (convenience function)
pub fn synthesize(value: &Value, options: &ConversionOptions) -> SchemaFragment {
    SchemaSynthesizer::new(options).synthesize(value)
}
