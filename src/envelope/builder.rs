//! Envelope construction

use super::types::{
    ChatCompletionsRequest, Envelope, JsonSchemaSpec, Message, ResponseFormat, ResponsesInput,
    ResponsesRequest, TextConfig, TextFormat, DEVELOPER_PROMPT, MAX_TOKENS, MODEL, TEMPERATURE,
    USER_PROMPT,
};
use crate::config::ConversionOptions;
use crate::types::{ApiType, ConversationMode, InputKind, OutputMode};
use serde_json::Value;

/// Wrap a finished fragment into the request shape the options select
///
/// JSON mode never carries the fragment. In structured mode the schema name
/// comes from `source_title` when the input was an authored schema with a
/// title, falling back to `options.schema_name`.
pub fn build_envelope(
    fragment: Value,
    options: &ConversionOptions,
    input_kind: InputKind,
    source_title: Option<&str>,
) -> Envelope {
    let spec = match options.output_mode {
        OutputMode::JsonMode => None,
        OutputMode::Structured => Some(JsonSchemaSpec {
            name: resolve_schema_name(options, input_kind, source_title),
            schema: fragment,
            strict: options.strict_mode.then_some(true),
        }),
    };

    match options.api_type {
        ApiType::ChatCompletions => Envelope::ChatCompletions(ChatCompletionsRequest {
            model: MODEL.to_string(),
            messages: Message::placeholders(),
            temperature: TEMPERATURE,
            max_completion_tokens: MAX_TOKENS,
            response_format: match spec {
                Some(json_schema) => ResponseFormat::JsonSchema { json_schema },
                None => ResponseFormat::JsonObject,
            },
        }),
        ApiType::Responses => {
            let (instructions, input) = match options.conversation_mode {
                ConversationMode::Instructions => (
                    Some(DEVELOPER_PROMPT.to_string()),
                    ResponsesInput::Text(USER_PROMPT.to_string()),
                ),
                ConversationMode::Roles => {
                    (None, ResponsesInput::Messages(Message::placeholders()))
                }
            };

            Envelope::Responses(ResponsesRequest {
                model: MODEL.to_string(),
                instructions,
                input,
                temperature: TEMPERATURE,
                max_output_tokens: MAX_TOKENS,
                text: TextConfig {
                    format: spec.map_or(TextFormat::JsonObject, TextFormat::JsonSchema),
                },
            })
        }
    }
}

/// Pick the schema name for a structured envelope
pub fn resolve_schema_name(
    options: &ConversionOptions,
    input_kind: InputKind,
    source_title: Option<&str>,
) -> String {
    match (input_kind, source_title) {
        (InputKind::Schema, Some(title)) if !title.is_empty() => schema_name_from_title(title),
        _ => options.schema_name.clone(),
    }
}

/// Lower-case a title and collapse each whitespace run into one underscore
pub fn schema_name_from_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    regex::Regex::new(r"\s+")
        .map(|re| re.replace_all(&lowered, "_").into_owned())
        .unwrap_or(lowered)
}
