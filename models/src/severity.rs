use serde::{Deserialize, Serialize};

use crate::CvssVersion;

/// Qualitative CVSS severity rating.
///
/// Deserialization goes through [`FromStr`](std::str::FromStr), so labels are
/// case-insensitive and `info`/`informational` map to [`Severity::None`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    /// Informational: the lowest level, excluded from per-target counts.
    #[default]
    None,
}

impl Severity {
    /// All severity variants in descending order.
    pub const ALL: &[Severity] = &[
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::None,
    ];

    /// The informational level.
    pub const LOWEST: Severity = Severity::None;

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::None => "None",
        }
    }

    pub fn is_informational(&self) -> bool {
        *self == Self::LOWEST
    }

    /// Map a base score to its rating band for the given CVSS version.
    ///
    /// CVSS 2.0 has no critical band, so anything from 7.0 upwards is `High`.
    pub fn from_score(version: CvssVersion, score: f64) -> Self {
        if score >= 9.0 && version != CvssVersion::V2 {
            Severity::Critical
        } else if score >= 7.0 {
            Severity::High
        } else if score >= 4.0 {
            Severity::Medium
        } else if score >= 0.1 {
            Severity::Low
        } else {
            Severity::None
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            "none" | "info" | "informational" => Ok(Severity::None),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Attack complexity label reported alongside a vector.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
