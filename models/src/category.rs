use serde::{Deserialize, Serialize};

/// Taxonomy source for categories maintained by hand.
pub const SOURCE_GENERIC: &str = "generic";
/// Taxonomy source for categories created by the Nessus importer.
pub const SOURCE_NESSUS: &str = "nessus";
/// Taxonomy source for categories created by the Burp importer.
pub const SOURCE_BURP: &str = "burp";

/// A vulnerability class within a taxonomy (e.g. OWASP `A03:2021`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Provenance of the taxonomy, e.g. [`SOURCE_GENERIC`].
    pub source: String,
    /// Stable identifier within the source.
    pub identifier: String,
    pub name: String,
    pub generic_description: String,
    pub generic_remediation: String,
    pub references: Vec<String>,
}

impl Category {
    pub fn new(
        source: impl Into<String>,
        identifier: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            identifier: identifier.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}
