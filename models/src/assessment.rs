use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CvssVersion, Target};

/// Short and long name of the kind of assessment (e.g. `WAPT`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentType {
    pub short: String,
    pub full: String,
}

/// Assessment metadata as handed over by the fetch layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    pub name: String,
    pub language: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub environment: String,
    pub testing_type: String,
    pub osstmm_vector: String,
    pub targets: Vec<Target>,
    /// CVSS version identifier → enabled flag. Keys are free-form strings;
    /// only those naming a supported [`CvssVersion`] are meaningful.
    pub cvss_versions: BTreeMap<String, bool>,
}

impl Assessment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Mark `version` as enabled.
    pub fn with_cvss(mut self, version: CvssVersion) -> Self {
        self.cvss_versions.insert(version.as_str().into(), true);
        self
    }

    /// Enabled, recognised versions in ascending order.
    pub fn enabled_versions(&self) -> Vec<CvssVersion> {
        let mut versions: Vec<CvssVersion> = self
            .cvss_versions
            .iter()
            .filter(|(_, enabled)| **enabled)
            .filter_map(|(key, _)| key.parse().ok())
            .collect();
        versions.sort();
        versions.dedup();
        versions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_versions_skips_disabled_and_unknown() {
        let mut a = Assessment::new("q3").with_cvss(CvssVersion::V4).with_cvss(CvssVersion::V31);
        a.cvss_versions.insert("2.0".into(), false);
        a.cvss_versions.insert("10.0".into(), true);

        assert_eq!(a.enabled_versions(), vec![CvssVersion::V31, CvssVersion::V4]);
    }

    #[test]
    fn no_versions_is_valid() {
        assert!(Assessment::new("empty").enabled_versions().is_empty());
    }
}
