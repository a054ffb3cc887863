use serde::{Deserialize, Serialize};

use crate::{Complexity, Severity};

/// A supported CVSS specification version.
///
/// Ordering follows the declaration order, so "maximum version" never
/// depends on how the textual identifiers happen to sort.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum CvssVersion {
    #[serde(rename = "2.0")]
    V2,
    #[serde(rename = "3.0")]
    V3,
    #[serde(rename = "3.1")]
    V31,
    #[serde(rename = "4.0")]
    V4,
}

impl CvssVersion {
    /// All supported versions, oldest first.
    pub const ALL: &[CvssVersion] = &[
        CvssVersion::V2,
        CvssVersion::V3,
        CvssVersion::V31,
        CvssVersion::V4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CvssVersion::V2 => "2.0",
            CvssVersion::V3 => "3.0",
            CvssVersion::V31 => "3.1",
            CvssVersion::V4 => "4.0",
        }
    }
}

impl std::fmt::Display for CvssVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CvssVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.0" => Ok(CvssVersion::V2),
            "3.0" => Ok(CvssVersion::V3),
            "3.1" => Ok(CvssVersion::V31),
            "4.0" => Ok(CvssVersion::V4),
            other => Err(format!("unknown CVSS version: {other}")),
        }
    }
}

/// A scored CVSS vector as produced by the scoring library.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector {
    pub version: String,
    /// The raw vector string, e.g. `CVSS:3.1/AV:N/AC:L/...`.
    pub vector: String,
    pub score: f64,
    pub severity: Severity,
    pub complexity: Option<Complexity>,
    /// Human-readable explanation of the vector metrics.
    pub description: String,
}

impl Vector {
    /// Build a vector whose severity is derived from `score`.
    pub fn new(version: CvssVersion, vector: impl Into<String>, score: f64) -> Self {
        Self {
            version: version.as_str().into(),
            vector: vector.into(),
            score,
            severity: Severity::from_score(version, score),
            complexity: None,
            description: String::new(),
        }
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}

/// One vector per supported CVSS version.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvssSet {
    #[serde(rename = "2.0")]
    pub v2: Vector,
    #[serde(rename = "3.0")]
    pub v3: Vector,
    #[serde(rename = "3.1")]
    pub v31: Vector,
    #[serde(rename = "4.0")]
    pub v4: Vector,
}

impl CvssSet {
    pub fn get(&self, version: CvssVersion) -> &Vector {
        match version {
            CvssVersion::V2 => &self.v2,
            CvssVersion::V3 => &self.v3,
            CvssVersion::V31 => &self.v31,
            CvssVersion::V4 => &self.v4,
        }
    }

    pub fn get_mut(&mut self, version: CvssVersion) -> &mut Vector {
        match version {
            CvssVersion::V2 => &mut self.v2,
            CvssVersion::V3 => &mut self.v3,
            CvssVersion::V31 => &mut self.v31,
            CvssVersion::V4 => &mut self.v4,
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vector> {
        [&mut self.v2, &mut self.v3, &mut self.v31, &mut self.v4].into_iter()
    }

    /// Convenience builder that stores `vector` under `version`.
    pub fn with(mut self, version: CvssVersion, vector: Vector) -> Self {
        *self.get_mut(version) = vector;
        self
    }
}
