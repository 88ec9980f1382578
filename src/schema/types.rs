//! Schema types

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Array => write!(f, "array"),
        }
    }
}

/// Object properties in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, SchemaFragment)>);

impl Properties {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace a property, keeping the first position of the key
    pub fn insert(&mut self, name: impl Into<String>, fragment: SchemaFragment) {
        let name = name.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = fragment;
        } else {
            self.0.push((name, fragment));
        }
    }

    pub fn get(&self, name: &str) -> Option<&SchemaFragment> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, fragment) in &self.0 {
            map.serialize_entry(name, fragment)?;
        }
        map.end()
    }
}

/// A node of a synthesized schema tree
///
/// Field order matches the order keys are emitted: `type`, `properties`,
/// `required`, `additionalProperties`, `items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaFragment {
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Nested properties (for objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    /// Required property names, a subset of `properties`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<bool>,

    /// Array items schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaFragment>>,
}

impl SchemaFragment {
    /// Create a fragment that only declares a type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type,
            properties: None,
            required: None,
            additional_properties: None,
            items: None,
        }
    }

    /// Create an object fragment with nested properties
    pub fn object(properties: Properties) -> Self {
        Self {
            properties: Some(properties),
            ..Self::new(JsonType::Object)
        }
    }

    /// Create an array fragment with an item schema
    pub fn array(items: SchemaFragment) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(JsonType::Array)
        }
    }

    /// Set the required list; an empty list is left out
    #[must_use]
    pub fn with_required(mut self, required: Vec<String>) -> Self {
        self.required = if required.is_empty() {
            None
        } else {
            Some(required)
        };
        self
    }

    #[must_use]
    pub fn with_additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }

    pub fn get_property(&self, name: &str) -> Option<&SchemaFragment> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|r| r.iter().any(|n| n == name))
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
