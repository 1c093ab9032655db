//! Integration tests for serializing a populated operation.

use oaswrite::{
    EventWriter, JsonWriter, OperationSerializer, Response, Responses, SecurityRequirement,
    SecurityScheme, SpecVersion, WriteEvent, serialize_extensible_map, ElementSerializer,
    ResponseSerializer,
};

#[test]
fn responses_map_with_extension_emits_entries_then_extension() {
    //* Given
    let responses = Responses::new()
        .entry("200", Response::new().description("ok"))
        .entry("404", Response::new().description("not found"))
        .extension("x-foo", "bar");

    //* When
    let mut writer = EventWriter::new();
    serialize_extensible_map(
        Some(&responses),
        &ResponseSerializer,
        SpecVersion::V3_0,
        &mut writer,
    )
    .expect("should serialize responses map");

    //* Then
    assert_eq!(
        writer.events(),
        [
            WriteEvent::BeginObject,
            WriteEvent::Property("200".to_string()),
            WriteEvent::BeginObject,
            WriteEvent::Property("description".to_string()),
            WriteEvent::String("ok".to_string()),
            WriteEvent::EndObject,
            WriteEvent::Property("404".to_string()),
            WriteEvent::BeginObject,
            WriteEvent::Property("description".to_string()),
            WriteEvent::String("not found".to_string()),
            WriteEvent::EndObject,
            WriteEvent::Property("x-foo".to_string()),
            WriteEvent::String("bar".to_string()),
            WriteEvent::EndObject,
        ]
    );
}

#[test]
fn serializing_the_same_graph_twice_produces_identical_event_streams() {
    //* Given
    let operation = build_operation();

    //* When
    let mut first = EventWriter::new();
    OperationSerializer
        .serialize(&operation, SpecVersion::V3_0, &mut first)
        .expect("first pass should serialize");
    let mut second = EventWriter::new();
    OperationSerializer
        .serialize(&operation, SpecVersion::V3_0, &mut second)
        .expect("second pass should serialize");

    //* Then
    assert_eq!(first.events(), second.events());
}

#[test]
fn absent_and_empty_responses_serialize_differently() {
    //* Given
    let absent = oaswrite::Operation::new().operation_id("noResponses");
    let empty = oaswrite::Operation::new()
        .operation_id("noResponses")
        .responses(Responses::new());

    //* When
    let mut absent_writer = JsonWriter::new();
    OperationSerializer
        .serialize(&absent, SpecVersion::V3_0, &mut absent_writer)
        .expect("should serialize operation without responses");
    let mut empty_writer = JsonWriter::new();
    OperationSerializer
        .serialize(&empty, SpecVersion::V3_0, &mut empty_writer)
        .expect("should serialize operation with empty responses");

    //* Then
    let absent_value = absent_writer.finish().expect("should finish cleanly");
    let empty_value = empty_writer.finish().expect("should finish cleanly");
    assert!(absent_value.get("responses").is_none());
    assert_eq!(empty_value["responses"], serde_json::json!({}));
}

#[test]
fn populated_operation_matches_snapshot_at_revision_3_0() {
    //* Given
    let operation = build_operation();

    //* When
    let mut writer = JsonWriter::new();
    OperationSerializer
        .serialize(&operation, SpecVersion::V3_0, &mut writer)
        .expect("should serialize operation");
    let value = writer.finish().expect("should finish cleanly");
    let json = serde_json::to_string(&value).expect("should render JSON");

    //* Then
    insta::assert_snapshot!(
        json,
        @r#"{"tags":["pets"],"summary":"List pets","operationId":"listPets","responses":{"200":{"description":"ok"},"404":{"description":"not found"}},"security":[{"petstore_auth":["read:pets"]}],"x-internal":true}"#
    );
}

/// Builds the operation graph the passes above share.
fn build_operation() -> oaswrite::Operation {
    oaswrite::Operation::new()
        .tags(vec!["pets".to_string()])
        .summary("List pets")
        .operation_id("listPets")
        .responses(
            Responses::new()
                .entry("200", Response::new().description("ok"))
                .entry("404", Response::new().description("not found")),
        )
        .security(vec![SecurityRequirement::new().require(
            SecurityScheme::reference("petstore_auth"),
            vec!["read:pets".to_string()],
        )])
        .extension("x-internal", true)
}
