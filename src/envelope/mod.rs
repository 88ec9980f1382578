//! Envelope module
//!
//! Wraps a cleaned schema fragment into an OpenAI request body.
//!
//! # Shapes
//!
//! - **Chat Completions**: `messages` array, `response_format`
//! - **Responses / instructions**: `instructions` + string `input`, `text.format`
//! - **Responses / roles**: role-tagged `input` array, `text.format`
//!
//! Each shape comes in a JSON mode flavor (`json_object`) and a structured
//! flavor (`json_schema` carrying the fragment).

mod builder;
mod types;

pub use builder::{build_envelope, resolve_schema_name, schema_name_from_title};
pub use types::{
    ChatCompletionsRequest, Envelope, JsonSchemaSpec, Message, ResponseFormat, ResponsesInput,
    ResponsesRequest, Role, TextConfig, TextFormat, DEVELOPER_PROMPT, MAX_TOKENS, MODEL,
    TEMPERATURE, USER_PROMPT,
};
