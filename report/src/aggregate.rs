// report/src/aggregate.rs: read-only statistics over an assessment's
// vulnerabilities: highest vectors, severity histogram, per-target and
// per-category counters.

use std::collections::BTreeMap;

use log::warn;
use models::{CvssVersion, Severity, Vector, Vulnerability};
use serde::{Deserialize, Serialize};

use crate::palette::Palette;

/// Summary of the categories hit within one taxonomy source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OwaspCounter {
    /// Category identifier → color of the worst finding in that category.
    pub categories: BTreeMap<String, String>,
    /// Number of distinct categories with at least one finding.
    pub total: u32,
}

/// Highest enabled CVSS version, compared by [`CvssVersion`] ordinal.
///
/// Keys that do not name a supported version are ignored.
pub fn max_cvss_version(versions: &BTreeMap<String, bool>) -> Option<CvssVersion> {
    versions
        .iter()
        .filter(|(_, enabled)| **enabled)
        .filter_map(|(key, _)| match key.parse::<CvssVersion>() {
            Ok(version) => Some(version),
            Err(e) => {
                warn!("ignoring enabled CVSS version: {e}");
                None
            }
        })
        .max()
}

/// For each enabled version, the vector with the strictly highest score.
///
/// Ties keep the first vector seen. A version no vulnerability scores above
/// zero maps to the zero vector.
pub fn max_cvss(
    vulnerabilities: &[Vulnerability],
    enabled: &[CvssVersion],
) -> BTreeMap<CvssVersion, Vector> {
    let mut max: BTreeMap<CvssVersion, Vector> =
        enabled.iter().map(|&v| (v, Vector::default())).collect();

    for vulnerability in vulnerabilities {
        for (&version, best) in max.iter_mut() {
            let candidate = vulnerability.cvss.get(version);
            if candidate.score > best.score {
                *best = candidate.clone();
            }
        }
    }

    max
}

/// Version × severity histogram.
///
/// Every supported version and every severity is present, starting at zero;
/// only enabled versions are counted. Renderers lay out their tables from
/// the full key set.
pub fn severity_overview(
    vulnerabilities: &[Vulnerability],
    enabled: &[CvssVersion],
) -> BTreeMap<CvssVersion, BTreeMap<Severity, u32>> {
    let mut overview: BTreeMap<CvssVersion, BTreeMap<Severity, u32>> = CvssVersion::ALL
        .iter()
        .map(|&v| (v, Severity::ALL.iter().map(|&s| (s, 0)).collect()))
        .collect();

    for vulnerability in vulnerabilities {
        for &version in enabled {
            let severity = vulnerability.cvss.get(version).severity;
            if let Some(count) = overview.get_mut(&version).and_then(|m| m.get_mut(&severity)) {
                *count += 1;
            }
        }
    }

    overview
}

/// Number of non-informational findings per target name, rated at
/// `max_version`. Targets without such findings are absent.
pub fn target_counter(
    vulnerabilities: &[Vulnerability],
    max_version: Option<CvssVersion>,
) -> BTreeMap<String, u32> {
    let mut counter = BTreeMap::new();
    let Some(version) = max_version else {
        return counter;
    };

    for vulnerability in vulnerabilities {
        if vulnerability.cvss.get(version).severity.is_informational() {
            continue;
        }
        *counter.entry(vulnerability.target.name().to_string()).or_insert(0) += 1;
    }

    counter
}

/// Distinct categories per taxonomy source, each colored after its
/// highest-scoring finding at `max_version`.
///
/// A category is counted once, on first sight; later findings in the same
/// category only replace the color when they score strictly higher. Without
/// a version every finding is rated informational.
pub fn owasp_counter(
    vulnerabilities: &[Vulnerability],
    max_version: Option<CvssVersion>,
    palette: &Palette,
) -> BTreeMap<String, OwaspCounter> {
    let mut counters: BTreeMap<String, OwaspCounter> = BTreeMap::new();
    let mut best_scores: BTreeMap<(&str, &str), f64> = BTreeMap::new();

    for vulnerability in vulnerabilities {
        let category = &vulnerability.category;
        let (score, severity) = match max_version {
            Some(version) => {
                let vector = vulnerability.cvss.get(version);
                (vector.score, vector.severity)
            }
            None => (0.0, Severity::LOWEST),
        };
        let color = palette.severity_color(severity);

        let counter = counters.entry(category.source.clone()).or_default();
        let key = (category.source.as_str(), category.identifier.as_str());

        match best_scores.get_mut(&key) {
            None => {
                best_scores.insert(key, score);
                counter.total += 1;
                counter.categories.insert(category.identifier.clone(), color.to_string());
            }
            Some(best) if score > *best => {
                *best = score;
                counter.categories.insert(category.identifier.clone(), color.to_string());
            }
            Some(_) => {}
        }
    }

    counters
}
