//! Element serializer for security requirements.

use super::{ElementSerializer, SpecVersion};
use crate::{
    openapi::SecurityRequirement,
    writer::{StructuralWriter, WriteError},
};

/// Serializes a [`SecurityRequirement`] as an object of scheme identifiers
/// to scope arrays.
///
/// Only resolved handles have a name to write under; entries whose scheme
/// has no resolved identifier are skipped. Forbidding unresolved handles is
/// a validation concern upstream of serialization.
pub struct SecurityRequirementSerializer;

impl ElementSerializer<SecurityRequirement> for SecurityRequirementSerializer {
    fn serialize<W: StructuralWriter>(
        &self,
        element: &SecurityRequirement,
        _version: SpecVersion,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        writer.begin_object()?;
        for (scheme, scopes) in element.iter() {
            let Some(id) = scheme.reference_id() else {
                continue;
            };
            writer.property(id)?;
            writer.begin_array()?;
            for scope in scopes {
                writer.string(scope)?;
            }
            writer.end_array()?;
        }
        writer.end_object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        openapi::{SecurityScheme, SecuritySchemeType},
        writer::JsonWriter,
    };

    #[test]
    fn requirement_writes_scopes_under_resolved_identifier() {
        //* Given
        let requirement = SecurityRequirement::new().require(
            SecurityScheme::reference("petstore_auth"),
            vec!["read:pets".to_string(), "write:pets".to_string()],
        );

        //* When
        let mut writer = JsonWriter::new();
        SecurityRequirementSerializer
            .serialize(&requirement, SpecVersion::V3_0, &mut writer)
            .expect("should serialize requirement");

        //* Then
        let value = writer.finish().expect("should finish cleanly");
        assert_eq!(
            value,
            serde_json::json!({"petstore_auth": ["read:pets", "write:pets"]})
        );
    }

    #[test]
    fn unresolved_handle_is_skipped_without_error() {
        //* Given
        let requirement = SecurityRequirement::new()
            .require(SecurityScheme::reference("api_key"), Vec::new())
            .require(
                SecurityScheme::new().scheme_type(SecuritySchemeType::Http),
                vec!["unwritable".to_string()],
            );

        //* When
        let mut writer = JsonWriter::new();
        SecurityRequirementSerializer
            .serialize(&requirement, SpecVersion::V3_0, &mut writer)
            .expect("unresolved entries should not fail the pass");

        //* Then
        let value = writer.finish().expect("should finish cleanly");
        assert_eq!(value, serde_json::json!({"api_key": []}));
    }

    #[test]
    fn scope_order_is_preserved_verbatim() {
        //* Given
        let requirement = SecurityRequirement::new().require(
            SecurityScheme::reference("oauth2"),
            vec![
                "write:pets".to_string(),
                "read:pets".to_string(),
                "write:pets".to_string(),
            ],
        );

        //* When
        let mut writer = JsonWriter::new();
        SecurityRequirementSerializer
            .serialize(&requirement, SpecVersion::V3_1, &mut writer)
            .expect("should serialize requirement");

        //* Then
        let value = writer.finish().expect("should finish cleanly");
        assert_eq!(
            value,
            serde_json::json!({"oauth2": ["write:pets", "read:pets", "write:pets"]}),
            "scopes are neither deduplicated nor reordered"
        );
    }
}
