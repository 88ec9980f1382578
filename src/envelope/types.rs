//! Request envelope types
//!
//! Field order in these structs is the key order of the emitted JSON.

use serde::Serialize;
use serde_json::Value;

/// Model identifier written into every envelope
pub const MODEL: &str = "gpt-4o-2024-08-06";

/// Sampling temperature written into every envelope
pub const TEMPERATURE: f64 = 0.7;

/// Token limit written into every envelope
pub const MAX_TOKENS: u32 = 1000;

/// Placeholder for the developer prompt
pub const DEVELOPER_PROMPT: &str = "YOUR DEVELOPER PROMPT HERE";

/// Placeholder for the user prompt
pub const USER_PROMPT: &str = "YOUR USER PROMPT HERE";

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    User,
}

/// A role-tagged prompt message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn developer() -> Self {
        Self {
            role: Role::Developer,
            content: DEVELOPER_PROMPT.to_string(),
        }
    }

    pub fn user() -> Self {
        Self {
            role: Role::User,
            content: USER_PROMPT.to_string(),
        }
    }

    /// The fixed developer/user pair
    pub fn placeholders() -> Vec<Self> {
        vec![Self::developer(), Self::user()]
    }
}

/// Named schema attached to a structured request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonSchemaSpec {
    pub name: String,
    pub schema: Value,
    /// Only emitted in strict mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

// ============================================================================
// Chat Completions
// ============================================================================

/// Chat Completions `response_format`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Any syntactically valid JSON object
    JsonObject,
    /// JSON conforming to `json_schema`
    JsonSchema { json_schema: JsonSchemaSpec },
}

/// Chat Completions request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionsRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_completion_tokens: u32,
    pub response_format: ResponseFormat,
}

// ============================================================================
// Responses
// ============================================================================

/// Responses API `text.format`. The schema fields sit inline next to `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextFormat {
    JsonObject,
    JsonSchema(JsonSchemaSpec),
}

/// Responses API `text` block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextConfig {
    pub format: TextFormat,
}

/// Responses API `input`: a plain prompt or role-tagged messages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponsesInput {
    Text(String),
    Messages(Vec<Message>),
}

/// Responses API request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    /// Set in instructions mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub input: ResponsesInput,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub text: TextConfig,
}

// ============================================================================
// Envelope
// ============================================================================

/// The final request payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    ChatCompletions(ChatCompletionsRequest),
    Responses(ResponsesRequest),
}

impl Envelope {
    /// The attached schema spec, if the envelope is a structured request
    pub fn json_schema(&self) -> Option<&JsonSchemaSpec> {
        match self {
            Envelope::ChatCompletions(req) => match &req.response_format {
                ResponseFormat::JsonSchema { json_schema } => Some(json_schema),
                ResponseFormat::JsonObject => None,
            },
            Envelope::Responses(req) => match &req.text.format {
                TextFormat::JsonSchema(spec) => Some(spec),
                TextFormat::JsonObject => None,
            },
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
