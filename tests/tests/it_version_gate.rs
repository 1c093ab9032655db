//! Integration tests for revision gating across the serializer.

use oaswrite::{
    ElementSerializer, ExtensibleMap, JsonWriter, Map, Operation, OperationSerializer, Ref,
    Response, Responses, SpecVersion, allows,
};

#[test]
fn operation_callbacks_appear_only_from_revision_3_0() {
    //* Given
    let callback = ExtensibleMap::new().entry(
        "{$request.body#/callbackUrl}",
        Ref::new("#/components/pathItems/notify"),
    );
    let mut callbacks = Map::new();
    callbacks.insert("onEvent".to_string(), callback);
    let operation = Operation::new().operation_id("subscribe").callbacks(callbacks);

    //* When
    let at_2_0 = serialize_at(&operation, SpecVersion::V2_0);
    let at_3_0 = serialize_at(&operation, SpecVersion::V3_0);

    //* Then
    assert!(at_2_0.get("callbacks").is_none());
    assert!(at_3_0.get("callbacks").is_some());
}

#[test]
fn unknown_extension_key_is_emitted_at_every_revision() {
    //* Given
    let operation = Operation::new()
        .operation_id("listPets")
        .extension("x-audit-log", true);

    //* Then
    for version in [
        SpecVersion::V2_0,
        SpecVersion::V3_0,
        SpecVersion::V3_1,
        SpecVersion::V3_2,
    ] {
        let value = serialize_at(&operation, version);
        assert_eq!(
            value["x-audit-log"],
            serde_json::json!(true),
            "extension should be present at revision {version}"
        );
    }
}

#[test]
fn response_content_tracks_the_gate_table() {
    //* Given
    let response = Response::new()
        .description("ok")
        .content(Map::new());
    let operation = Operation::new().responses(Responses::new().entry("200", response));

    //* When
    let at_2_0 = serialize_at(&operation, SpecVersion::V2_0);
    let at_3_1 = serialize_at(&operation, SpecVersion::V3_1);

    //* Then
    assert!(at_2_0["responses"]["200"].get("content").is_none());
    assert!(at_3_1["responses"]["200"].get("content").is_some());
}

#[test]
fn gate_results_are_consistent_with_the_emitted_output() {
    //* Then
    assert!(!allows("callbacks", SpecVersion::V2_0));
    assert!(allows("callbacks", SpecVersion::V3_0));
    assert!(!allows("webhooks", SpecVersion::V2_0));
    assert!(allows("webhooks", SpecVersion::V3_1));
}

/// Serializes the operation at a revision and returns the resulting value.
fn serialize_at(operation: &Operation, version: SpecVersion) -> serde_json::Value {
    let mut writer = JsonWriter::new();
    OperationSerializer
        .serialize(operation, version, &mut writer)
        .expect("should serialize operation");
    writer.finish().expect("should finish cleanly")
}
