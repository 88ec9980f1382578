//! Conversion options
//!
//! `ConversionOptions` is the immutable snapshot every conversion runs
//! against. It can be built in code, loaded from a YAML/JSON file, or posted
//! to the server; all three use the same camelCase field names.

use crate::error::{Error, Result};
use crate::types::{ApiType, ConversationMode, OutputMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Schema name used when the input carries no usable title
pub const DEFAULT_SCHEMA_NAME: &str = "generated_schema";

/// Options for a single conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Target endpoint
    pub api_type: ApiType,

    /// Structured Outputs or JSON mode
    pub output_mode: OutputMode,

    /// Prompt layout, only read for the Responses API
    pub conversation_mode: ConversationMode,

    /// Require every property and flag the schema as strict
    pub strict_mode: bool,

    /// Value forced onto `additionalProperties` of every object node
    pub additional_properties: bool,

    /// Fallback name for the generated schema
    pub schema_name: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            api_type: ApiType::Responses,
            output_mode: OutputMode::Structured,
            conversation_mode: ConversationMode::Instructions,
            strict_mode: true,
            additional_properties: false,
            schema_name: DEFAULT_SCHEMA_NAME.to_string(),
        }
    }
}

impl ConversionOptions {
    /// Create options with the initial configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse options from YAML. JSON is valid YAML, so this accepts both.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let options: Self = serde_yaml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse options from a JSON value (server request bodies)
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let options: Self = serde_json::from_value(value)
            .map_err(|e| Error::config(format!("Invalid options: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<()> {
        if self.schema_name.trim().is_empty() {
            return Err(Error::config("schemaName cannot be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_api_type(mut self, api_type: ApiType) -> Self {
        self.api_type = api_type;
        self
    }

    #[must_use]
    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    #[must_use]
    pub fn with_conversation_mode(mut self, conversation_mode: ConversationMode) -> Self {
        self.conversation_mode = conversation_mode;
        self
    }

    #[must_use]
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    #[must_use]
    pub fn with_additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = allowed;
        self
    }

    #[must_use]
    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_options() {
        let options = ConversionOptions::default();
        assert_eq!(options.api_type, ApiType::Responses);
        assert_eq!(options.output_mode, OutputMode::Structured);
        assert_eq!(options.conversation_mode, ConversationMode::Instructions);
        assert!(options.strict_mode);
        assert!(!options.additional_properties);
        assert_eq!(options.schema_name, "generated_schema");
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
apiType: chat-completions
strictMode: false
schemaName: person
"#;
        let options = ConversionOptions::from_yaml_str(yaml).unwrap();
        assert_eq!(options.api_type, ApiType::ChatCompletions);
        assert!(!options.strict_mode);
        assert_eq!(options.schema_name, "person");
        // Unset fields keep the initial configuration
        assert_eq!(options.output_mode, OutputMode::Structured);
        assert!(!options.additional_properties);
    }

    #[test]
    fn test_parse_json_options() {
        let json = r#"{"outputMode": "json-mode", "conversationMode": "roles"}"#;
        let options = ConversionOptions::from_yaml_str(json).unwrap();
        assert_eq!(options.output_mode, OutputMode::JsonMode);
        assert_eq!(options.conversation_mode, ConversationMode::Roles);
    }

    #[test]
    fn test_empty_content_is_default() {
        let options = ConversionOptions::from_yaml_str("   \n").unwrap();
        assert_eq!(options, ConversionOptions::default());
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let err = ConversionOptions::from_yaml_str("apiType: completions").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
        assert!(err.to_string().starts_with("Failed to parse YAML"));
    }

    #[test]
    fn test_empty_schema_name_rejected() {
        let err = ConversionOptions::from_value(serde_json::json!({"schemaName": " "}))
            .unwrap_err();
        assert!(err.to_string().contains("schemaName"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "additionalProperties: true").unwrap();

        let options = ConversionOptions::from_file(file.path()).unwrap();
        assert!(options.additional_properties);
    }

    #[test]
    fn test_from_missing_file() {
        let err = ConversionOptions::from_file("/nonexistent/options.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read options file"));
    }

    #[test]
    fn test_builder_methods() {
        let options = ConversionOptions::new()
            .with_api_type(ApiType::ChatCompletions)
            .with_output_mode(OutputMode::JsonMode)
            .with_conversation_mode(ConversationMode::Roles)
            .with_strict_mode(false)
            .with_additional_properties(true)
            .with_schema_name("orders");

        assert_eq!(options.api_type, ApiType::ChatCompletions);
        assert_eq!(options.output_mode, OutputMode::JsonMode);
        assert_eq!(options.conversation_mode, ConversationMode::Roles);
        assert!(!options.strict_mode);
        assert!(options.additional_properties);
        assert_eq!(options.schema_name, "orders");
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(ConversionOptions::default()).unwrap();
        assert_eq!(value["apiType"], "responses");
        assert_eq!(value["outputMode"], "structured");
        assert_eq!(value["schemaName"], "generated_schema");
    }
}
