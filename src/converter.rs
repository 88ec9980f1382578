//! End-to-end conversion
//!
//! `convert` runs the whole pipeline on raw text:
//!
//! ```text
//! text → parse → classify → synthesize | normalize → clean → envelope
//! ```
//!
//! `SchemaConverter` keeps the latest input, options and result, and reruns
//! the pipeline in full whenever either input changes.

use crate::config::ConversionOptions;
use crate::detect::classify;
use crate::envelope::{build_envelope, resolve_schema_name, Envelope};
use crate::error::{Error, Result};
use crate::schema::{clean, normalize, synthesize};
use crate::types::InputKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// What the classifier decided the input was
    pub detected_type: InputKind,
    /// The finished request payload
    pub envelope: Envelope,
}

/// A cleaned schema without its envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaOutput {
    pub detected_type: InputKind,
    /// Name the schema would be given in a structured envelope
    pub name: String,
    pub schema: Value,
}

/// Convert raw JSON text. Blank input yields `Ok(None)`.
pub fn convert(text: &str, options: &ConversionOptions) -> Result<Option<Conversion>> {
    match parse_input(text)? {
        Some(value) => convert_value(&value, options).map(Some),
        None => Ok(None),
    }
}

/// Convert an already-parsed document
pub fn convert_value(value: &Value, options: &ConversionOptions) -> Result<Conversion> {
    let (detected_type, schema) = cleaned_schema(value, options)?;
    let envelope = build_envelope(schema, options, detected_type, source_title(value));

    tracing::debug!(
        detected = %detected_type,
        api = ?options.api_type,
        mode = ?options.output_mode,
        "Built envelope"
    );

    Ok(Conversion {
        detected_type,
        envelope,
    })
}

/// Run the pipeline up to the cleaner and stop there. Blank input yields `Ok(None)`.
pub fn schema_only(text: &str, options: &ConversionOptions) -> Result<Option<SchemaOutput>> {
    let Some(value) = parse_input(text)? else {
        return Ok(None);
    };

    let (detected_type, schema) = cleaned_schema(&value, options)?;
    Ok(Some(SchemaOutput {
        detected_type,
        name: resolve_schema_name(options, detected_type, source_title(&value)),
        schema,
    }))
}

/// Classify raw text without converting it. Blank input yields `Ok(None)`.
pub fn detect(text: &str) -> Result<Option<InputKind>> {
    Ok(parse_input(text)?.map(|value| classify(&value)))
}

/// Parse and shape-check the input text
fn parse_input(text: &str) -> Result<Option<Value>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    // No depth cap and no f64 range check: anything syntactically valid parses
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;

    ensure_container(&value)?;
    Ok(Some(value))
}

fn ensure_container(value: &Value) -> Result<()> {
    match value {
        Value::Object(_) | Value::Array(_) => Ok(()),
        _ => Err(Error::shape()),
    }
}

fn cleaned_schema(value: &Value, options: &ConversionOptions) -> Result<(InputKind, Value)> {
    ensure_container(value)?;

    let detected_type = classify(value);
    tracing::debug!(detected = %detected_type, "Classified input");

    let schema = match detected_type {
        InputKind::Schema => clean(&normalize(value, options)),
        InputKind::Data => clean(&synthesize(value, options).to_json()),
    };

    Ok((detected_type, schema))
}

fn source_title(value: &Value) -> Option<&str> {
    value.get("title").and_then(Value::as_str)
}

// ============================================================================
// Stateful converter
// ============================================================================

/// Everything a caller displays after a conversion attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterState {
    pub output: Option<Envelope>,
    pub detected_type: Option<InputKind>,
    pub error: Option<String>,
    pub is_valid: bool,
}

impl ConverterState {
    fn from_result(result: Result<Option<Conversion>>) -> Self {
        match result {
            Ok(Some(conversion)) => Self {
                output: Some(conversion.envelope),
                detected_type: Some(conversion.detected_type),
                error: None,
                is_valid: true,
            },
            Ok(None) => Self::default(),
            Err(e) => Self {
                error: Some(e.to_string()),
                ..Self::default()
            },
        }
    }
}

/// Holds the latest input text and options, and the result of converting them
#[derive(Debug, Clone, Default)]
pub struct SchemaConverter {
    input: String,
    options: ConversionOptions,
    state: ConverterState,
}

impl SchemaConverter {
    /// Create a converter with the initial configuration and no input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given options and no input
    pub fn with_options(options: ConversionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replace the input text and reconvert
    pub fn set_input(&mut self, text: impl Into<String>) -> &ConverterState {
        self.input = text.into();
        self.refresh()
    }

    /// Replace the options snapshot and reconvert the current input
    pub fn set_options(&mut self, options: ConversionOptions) -> &ConverterState {
        self.options = options;
        self.refresh()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    fn refresh(&mut self) -> &ConverterState {
        let result = convert(&self.input, &self.options);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "Conversion failed");
        }
        self.state = ConverterState::from_result(result);
        &self.state
    }
}
