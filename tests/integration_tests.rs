//! Integration tests
//!
//! Tests the full end-to-end flow: raw text → classification → schema → request body

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use solidafy_schema::schema::{clean, has_forbidden_keys};
use solidafy_schema::{
    convert, ApiType, ConversationMode, ConversionOptions, Error, InputKind, OutputMode,
    SchemaConverter,
};

fn all_option_combinations() -> Vec<ConversionOptions> {
    let mut combos = Vec::new();
    for api in [ApiType::Responses, ApiType::ChatCompletions] {
        for mode in [OutputMode::Structured, OutputMode::JsonMode] {
            for conversation in [ConversationMode::Instructions, ConversationMode::Roles] {
                for strict in [true, false] {
                    for additional in [true, false] {
                        combos.push(
                            ConversionOptions::default()
                                .with_api_type(api)
                                .with_output_mode(mode)
                                .with_conversation_mode(conversation)
                                .with_strict_mode(strict)
                                .with_additional_properties(additional),
                        );
                    }
                }
            }
        }
    }
    combos
}

fn schema_of(request: &Value) -> Option<&Value> {
    request
        .pointer("/text/format/schema")
        .or_else(|| request.pointer("/response_format/json_schema/schema"))
}

/// Every object node reachable through `properties`, `items` and `anyOf`
fn object_nodes(schema: &Value) -> Vec<&Value> {
    let mut nodes = Vec::new();
    if schema.get("type").and_then(Value::as_str) == Some("object") {
        nodes.push(schema);
    }
    if let Some(Value::Object(props)) = schema.get("properties") {
        for prop in props.values() {
            nodes.extend(object_nodes(prop));
        }
    }
    if let Some(items) = schema.get("items") {
        nodes.extend(object_nodes(items));
    }
    nodes
}

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn test_strict_responses_instructions_scenario() {
    let options = ConversionOptions::default()
        .with_strict_mode(true)
        .with_output_mode(OutputMode::Structured)
        .with_additional_properties(false)
        .with_api_type(ApiType::Responses)
        .with_conversation_mode(ConversationMode::Instructions)
        .with_schema_name("s");

    let conversion = convert(r#"{"a":1,"b":"x","c":null}"#, &options)
        .unwrap()
        .unwrap();

    assert_eq!(conversion.detected_type, InputKind::Data);
    assert_eq!(
        conversion.envelope.to_json()["text"]["format"],
        json!({
            "type": "json_schema",
            "name": "s",
            "schema": {
                "type": "object",
                "properties": {
                    "a": {"type": "integer"},
                    "b": {"type": "string"},
                    "c": {"type": "string"}
                },
                "required": ["a", "b", "c"],
                "additionalProperties": false
            },
            "strict": true
        })
    );
}

#[test]
fn test_empty_array_field_scenario() {
    let options = ConversionOptions::default();
    let conversion = convert(r#"{"tags": []}"#, &options).unwrap().unwrap();

    let request = conversion.envelope.to_json();
    assert_eq!(
        request["text"]["format"]["schema"]["properties"]["tags"]["items"],
        json!({"type": "string"})
    );
}

#[test]
fn test_primitive_input_clears_output() {
    let mut converter = SchemaConverter::new();
    converter.set_input(r#"{"ok": true}"#);
    assert!(converter.state().output.is_some());

    let state = converter.set_input("\"hello\"");

    assert!(state.output.is_none());
    assert!(state.detected_type.is_none());
    assert!(!state.is_valid);
    assert_eq!(
        state.error.as_deref(),
        Some("JSON must be an object or array, not a primitive value")
    );

    let err = convert("\"hello\"", &ConversionOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Shape { .. }));
}

#[test]
fn test_classification_examples() {
    let options = ConversionOptions::default();
    let cases = [
        (
            r#"{"$schema":"http://json-schema.org/draft-07/schema#","type":"object","properties":{}}"#,
            InputKind::Schema,
        ),
        (r#"{"name":"Ana","age":3}"#, InputKind::Data),
        (r#"{"title":"T","description":"D"}"#, InputKind::Schema),
    ];

    for (text, expected) in cases {
        let conversion = convert(text, &options).unwrap().unwrap();
        assert_eq!(conversion.detected_type, expected, "{text}");
    }
}

// ============================================================================
// Laws across every option combination
// ============================================================================

#[test]
fn test_policy_laws_for_data_input() {
    let text = r#"{
        "id": 7,
        "price": 9.99,
        "owner": {"name": "Ana", "nickname": null, "pets": [{"kind": "cat", "age": 2}]},
        "tags": ["a", "b"],
        "history": [],
        "flags": {"active": true}
    }"#;

    for options in all_option_combinations() {
        let conversion = convert(text, &options).unwrap().unwrap();
        let request = conversion.envelope.to_json();

        let Some(schema) = schema_of(&request) else {
            assert_eq!(options.output_mode, OutputMode::JsonMode);
            continue;
        };
        assert_eq!(options.output_mode, OutputMode::Structured);
        assert!(!has_forbidden_keys(schema));

        let nodes = object_nodes(schema);
        assert_eq!(nodes.len(), 4);
        for node in nodes {
            assert_eq!(
                node["additionalProperties"],
                Value::Bool(options.additional_properties)
            );
            if options.strict_mode {
                let keys: Vec<Value> = node["properties"]
                    .as_object()
                    .unwrap()
                    .keys()
                    .cloned()
                    .map(Value::String)
                    .collect();
                assert_eq!(node["required"], Value::Array(keys));
            }
        }
    }
}

#[test]
fn test_policy_laws_for_schema_input() {
    let text = r#"{
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "https://example.com/order.json",
        "title": "Purchase Order",
        "description": "An order",
        "type": "object",
        "$defs": {"money": {"type": "number"}},
        "properties": {
            "status": {"type": "string", "const": "open"},
            "lines": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {"sku": {"type": "string", "pattern": "^[A-Z]+$"}},
                    "patternProperties": {"^x-": {}}
                }
            },
            "payment": {
                "anyOf": [
                    {"type": "object", "properties": {"card": {"type": "string"}}, "allOf": []},
                    {"type": "null"}
                ]
            }
        },
        "if": {"properties": {"status": {"const": "open"}}},
        "then": {"required": ["lines"]}
    }"#;

    let options = ConversionOptions::default().with_api_type(ApiType::ChatCompletions);
    let conversion = convert(text, &options).unwrap().unwrap();
    assert_eq!(conversion.detected_type, InputKind::Schema);

    let request = conversion.envelope.to_json();
    let json_schema = &request["response_format"]["json_schema"];
    assert_eq!(json_schema["name"], "purchase_order");
    assert_eq!(json_schema["strict"], true);

    let schema = &json_schema["schema"];
    assert_eq!(
        schema,
        &json!({
            "type": "object",
            "properties": {
                "status": {"type": "string", "enum": ["open"]},
                "lines": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {"sku": {"type": "string", "pattern": "^[A-Z]+$"}},
                        "additionalProperties": false,
                        "required": ["sku"]
                    }
                },
                "payment": {
                    "anyOf": [
                        {"type": "object", "properties": {"card": {"type": "string"}}},
                        {"type": "null"}
                    ]
                }
            },
            "additionalProperties": false,
            "required": ["status", "lines", "payment"]
        })
    );
    assert!(!has_forbidden_keys(schema));
    assert_eq!(&clean(schema), schema);
}

#[test]
fn test_key_order_survives_pipeline() {
    let options = ConversionOptions::default();
    let conversion = convert(r#"{"zulu": 1, "alpha": 2, "10": 3, "mike": 4}"#, &options)
        .unwrap()
        .unwrap();

    let text = serde_json::to_string(&conversion.envelope).unwrap();
    let properties_at = text.find("\"properties\"").unwrap();
    let order: Vec<usize> = ["\"zulu\"", "\"alpha\"", "\"10\"", "\"mike\""]
        .iter()
        .map(|key| properties_at + text[properties_at..].find(key).unwrap())
        .collect();

    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(order, sorted);
}

#[test]
fn test_parse_error_message_is_reported() {
    let mut converter = SchemaConverter::new();
    let state = converter.set_input("{\"a\": 1,}");

    assert!(!state.is_valid);
    let expected = serde_json::from_str::<Value>("{\"a\": 1,}")
        .unwrap_err()
        .to_string();
    assert_eq!(state.error.as_deref(), Some(expected.as_str()));
}
