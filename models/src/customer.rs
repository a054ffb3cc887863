use serde::{Deserialize, Serialize};

/// The customer an assessment is performed for.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub name: String,
    /// Report language code, e.g. `en`.
    pub language: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self { name: name.into(), language: language.into() }
    }
}
