//! Spec revisions and the version gate.

use std::fmt;

/// A revision of the description language targeted by a serialization pass.
///
/// Revisions are totally ordered. The value is selected once per pass and
/// never mutated by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecVersion {
    /// Revision 2.0.
    V2_0,
    /// Revision 3.0.
    V3_0,
    /// Revision 3.1.
    V3_1,
    /// Revision 3.2.
    V3_2,
}

impl SpecVersion {
    /// The revision as it appears in a document.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecVersion::V2_0 => "2.0",
            SpecVersion::V3_0 => "3.0",
            SpecVersion::V3_1 => "3.1",
            SpecVersion::V3_2 => "3.2",
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the gate table: the revision range in which a field is legal.
struct GateRow {
    key: &'static str,
    introduced: SpecVersion,
    removed: Option<SpecVersion>,
}

/// The revisions in which each known structural field is legal.
///
/// This is a catalog of the description language, not of this crate's
/// structs: rows exist for fields the shipped entities do not model so that
/// callers serializing their own entities share one table.
const GATE_TABLE: &[GateRow] = &[
    GateRow {
        key: "callbacks",
        introduced: SpecVersion::V3_0,
        removed: None,
    },
    GateRow {
        key: "content",
        introduced: SpecVersion::V3_0,
        removed: None,
    },
    GateRow {
        key: "requestBody",
        introduced: SpecVersion::V3_0,
        removed: None,
    },
    GateRow {
        key: "consumes",
        introduced: SpecVersion::V2_0,
        removed: Some(SpecVersion::V3_0),
    },
    GateRow {
        key: "produces",
        introduced: SpecVersion::V2_0,
        removed: Some(SpecVersion::V3_0),
    },
    GateRow {
        key: "nullable",
        introduced: SpecVersion::V3_0,
        removed: Some(SpecVersion::V3_1),
    },
    GateRow {
        key: "webhooks",
        introduced: SpecVersion::V3_1,
        removed: None,
    },
    GateRow {
        key: "jsonSchemaDialect",
        introduced: SpecVersion::V3_1,
        removed: None,
    },
];

/// Whether a field or extension key is emitted at the given revision.
///
/// Pure table lookup, queried once per candidate field per pass. Keys not in
/// the table always return `true`: vendor extensions are open-ended and
/// revision-agnostic, so gating only applies to known structural fields.
pub fn allows(key: &str, version: SpecVersion) -> bool {
    match GATE_TABLE.iter().find(|row| row.key == key) {
        Some(row) => {
            version >= row.introduced && row.removed.is_none_or(|removed| version < removed)
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_totally_ordered() {
        assert!(SpecVersion::V2_0 < SpecVersion::V3_0);
        assert!(SpecVersion::V3_0 < SpecVersion::V3_1);
        assert!(SpecVersion::V3_1 < SpecVersion::V3_2);
    }

    #[test]
    fn field_introduced_later_is_gated_at_older_revision() {
        //* Then
        assert!(!allows("webhooks", SpecVersion::V2_0));
        assert!(!allows("webhooks", SpecVersion::V3_0));
        assert!(allows("webhooks", SpecVersion::V3_1));
        assert!(allows("webhooks", SpecVersion::V3_2));
    }

    #[test]
    fn field_removed_at_revision_is_gated_from_there_on() {
        //* Then
        assert!(allows("produces", SpecVersion::V2_0));
        assert!(!allows("produces", SpecVersion::V3_0));
        assert!(allows("nullable", SpecVersion::V3_0));
        assert!(!allows("nullable", SpecVersion::V3_1));
    }

    #[test]
    fn unknown_key_is_allowed_at_every_revision() {
        //* Then
        for version in [
            SpecVersion::V2_0,
            SpecVersion::V3_0,
            SpecVersion::V3_1,
            SpecVersion::V3_2,
        ] {
            assert!(allows("x-customer-tier", version));
        }
    }

    #[test]
    fn display_renders_document_form() {
        assert_eq!(SpecVersion::V3_1.to_string(), "3.1");
    }
}
