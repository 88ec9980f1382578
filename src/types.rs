//! Common types used throughout Solidafy Schema
//!
//! Option axes for a conversion and the classification tag.

use serde::{Deserialize, Serialize};

// ============================================================================
// API Type
// ============================================================================

/// Which OpenAI endpoint the generated request targets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ApiType {
    /// Responses API (`text.format`)
    #[default]
    Responses,
    /// Chat Completions API (`response_format`)
    ChatCompletions,
}

// ============================================================================
// Output Mode
// ============================================================================

/// Structured Outputs versus plain JSON mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Schema-bearing response format
    #[default]
    Structured,
    /// Free-form JSON object, no schema attached
    JsonMode,
}

impl OutputMode {
    /// Whether schemas should carry `additionalProperties`
    pub fn is_structured(self) -> bool {
        self == OutputMode::Structured
    }
}

// ============================================================================
// Conversation Mode
// ============================================================================

/// How prompts are laid out in a Responses API request
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConversationMode {
    /// `instructions` string plus a plain `input` string
    #[default]
    Instructions,
    /// `input` array of role-tagged messages
    Roles,
}

// ============================================================================
// Input Kind
// ============================================================================

/// What the classifier decided the input document is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Sample data to synthesize a schema from
    Data,
    /// An authored JSON Schema to normalize
    Schema,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Data => write!(f, "data"),
            InputKind::Schema => write!(f, "schema"),
        }
    }
}
