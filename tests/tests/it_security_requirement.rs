//! Integration tests for reference-identity keyed security requirements.

use oaswrite::{
    ElementSerializer, JsonWriter, KeyComparer, ReferenceIdentity, SecurityRequirement,
    SecurityRequirementSerializer, SecurityScheme, SecuritySchemeType, SpecVersion,
};

#[test]
fn distinct_instances_with_same_identifier_collapse_to_one_key() {
    //* Given
    let first = SecurityScheme::reference("oauth2")
        .scheme_type(SecuritySchemeType::OAuth2)
        .description("full definition");
    let second = SecurityScheme::reference("oauth2");
    let mut requirement = SecurityRequirement::new();

    //* When
    requirement.insert(first, vec!["read".to_string()]);
    requirement.insert(second, vec!["write".to_string()]);

    //* Then
    assert_eq!(requirement.len(), 1);
    let probe = SecurityScheme::reference("oauth2");
    assert_eq!(
        requirement.get(&probe),
        Some(&vec!["write".to_string()]),
        "the second insertion's scopes replace the first's"
    );
}

#[test]
fn requirement_with_mixed_schemes_serializes_resolved_keys_in_order() {
    //* Given
    let requirement = SecurityRequirement::new()
        .require(SecurityScheme::reference("api_key"), Vec::new())
        .require(
            SecurityScheme::reference("petstore_auth"),
            vec!["write:pets".to_string(), "read:pets".to_string()],
        );

    //* When
    let mut writer = JsonWriter::new();
    SecurityRequirementSerializer
        .serialize(&requirement, SpecVersion::V3_1, &mut writer)
        .expect("should serialize requirement");

    //* Then
    let value = writer.finish().expect("should finish cleanly");
    let json = serde_json::to_string(&value).expect("should render JSON");
    insta::assert_snapshot!(
        json,
        @r#"{"api_key":[],"petstore_auth":["write:pets","read:pets"]}"#
    );
}

#[test]
fn unresolved_handles_share_the_sentinel_hash_but_stay_distinct_keys() {
    //* Given
    let comparer = ReferenceIdentity;
    let a = SecurityScheme::new().scheme_type(SecuritySchemeType::Http);
    let b = SecurityScheme::new().scheme_type(SecuritySchemeType::Http);
    let mut requirement = SecurityRequirement::new();

    //* When
    requirement.insert(a.clone(), vec!["first".to_string()]);
    requirement.insert(b.clone(), vec!["second".to_string()]);

    //* Then
    assert_eq!(comparer.hash_of(&a), comparer.hash_of(&b));
    assert_eq!(
        requirement.len(),
        2,
        "equal hashes never merge unresolved handles"
    );
}

#[test]
fn requirement_round_trips_through_serde() {
    //* Given
    let requirement = SecurityRequirement::new().require(
        SecurityScheme::reference("petstore_auth"),
        vec!["read:pets".to_string()],
    );

    //* When
    let json = serde_json::to_string(&requirement).expect("should serialize requirement");
    let back: SecurityRequirement =
        serde_json::from_str(&json).expect("should deserialize requirement");

    //* Then
    let probe = SecurityScheme::reference("petstore_auth");
    assert_eq!(back.get(&probe), Some(&vec!["read:pets".to_string()]));
}
