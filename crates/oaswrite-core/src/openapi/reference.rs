//! References to reusable components.

/// A reference to a component defined elsewhere in the document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ref {
    /// The reference path to the component (e.g., "#/components/responses/NotFound").
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

impl Ref {
    /// Creates a reference from a full reference path.
    pub fn new(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: ref_path.into(),
        }
    }

    /// Creates a reference to a named security scheme component.
    pub fn security_scheme(name: impl AsRef<str>) -> Self {
        Self::new(format!(
            "#/components/securitySchemes/{}",
            name.as_ref()
        ))
    }

    /// The component identifier: the final segment of the reference path.
    ///
    /// This is the name under which the component is registered and the key
    /// written into the output document.
    pub fn name(&self) -> &str {
        self.ref_path
            .rsplit('/')
            .next()
            .unwrap_or(self.ref_path.as_str())
    }
}
