// report/src/palette.rs: severity and complexity colors, loadable from JSON.

use std::fs;
use std::path::Path;

use models::{Complexity, Severity};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Colors assigned to severities and complexities in rendered reports.
///
/// A `Palette` is plain immutable configuration: the engine never consults
/// global tables, so different color schemes can be used side by side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub severity: SeverityColors,
    pub complexity: ComplexityColors,
    /// Used for labels without an assigned color.
    pub fallback: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityColors {
    pub critical: String,
    pub high: String,
    pub medium: String,
    pub low: String,
    pub none: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityColors {
    pub low: String,
    pub medium: String,
    pub high: String,
}

impl Default for SeverityColors {
    fn default() -> Self {
        Self {
            critical: "#7030A0".into(),
            high: "#EE0000".into(),
            medium: "#FFC000".into(),
            low: "#FFFF00".into(),
            none: "#92d050".into(),
        }
    }
}

impl Default for ComplexityColors {
    fn default() -> Self {
        // Low complexity is the most dangerous, hence red.
        Self {
            low: "#EE0000".into(),
            medium: "#FFC000".into(),
            high: "#92d050".into(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            severity: SeverityColors::default(),
            complexity: ComplexityColors::default(),
            fallback: "#000000".into(),
        }
    }
}

impl Palette {
    /// Parse a palette from JSON; missing entries keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read a palette from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn severity_color(&self, severity: Severity) -> &str {
        let color = match severity {
            Severity::Critical => &self.severity.critical,
            Severity::High => &self.severity.high,
            Severity::Medium => &self.severity.medium,
            Severity::Low => &self.severity.low,
            Severity::None => &self.severity.none,
        };
        self.or_fallback(color)
    }

    /// Color for an optional complexity; unknown complexity gets the fallback.
    pub fn complexity_color(&self, complexity: Option<Complexity>) -> &str {
        let color = match complexity {
            Some(Complexity::Low) => &self.complexity.low,
            Some(Complexity::Medium) => &self.complexity.medium,
            Some(Complexity::High) => &self.complexity.high,
            None => &self.fallback,
        };
        self.or_fallback(color)
    }

    fn or_fallback<'a>(&'a self, color: &'a str) -> &'a str {
        if color.is_empty() { &self.fallback } else { color }
    }
}
