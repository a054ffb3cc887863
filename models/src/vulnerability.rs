use serde::{Deserialize, Serialize};

use crate::{Category, CvssSet, Poc, Target};

/// A reported vulnerability with its resolved category and target.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vulnerability {
    pub id: String,
    pub category: Category,
    pub cvss: CvssSet,
    pub detailed_title: String,
    pub status: String,
    pub description: String,
    pub remediation: String,
    pub references: Vec<String>,
    pub target: Target,
    pub poc: Poc,
}

impl Vulnerability {
    pub fn new(id: impl Into<String>, category: Category, target: Target) -> Self {
        Self { id: id.into(), category, target, ..Self::default() }
    }

    pub fn with_cvss(mut self, cvss: CvssSet) -> Self {
        self.cvss = cvss;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.detailed_title = title.into();
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_poc(mut self, poc: Poc) -> Self {
        self.poc = poc;
        self
    }
}
