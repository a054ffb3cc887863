// report/src/snapshot.rs: JSON adapter for an assessment handed over by the
// fetch layer.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use models::{Assessment, Customer, Vulnerability};
use serde::Deserialize;

use crate::error::{ReportError, Result};
use crate::prepare::{Preparer, ReportData};

/// An assessment as handed over by the fetch layer, before preparation.
///
/// ```json
/// {
///   "customer": { "name": "ACME", "language": "en" },
///   "assessment": { "name": "Q3 WAPT", "cvss_versions": { "3.1": true } },
///   "vulnerabilities": [],
///   "delivery_date_time": "2024-03-05T23:30:00Z"
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Snapshot {
    pub customer: Customer,
    pub assessment: Assessment,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
    /// RFC 3339 timestamp; absent when the caller does not schedule one.
    #[serde(default)]
    pub delivery_date_time: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(ReportError::InvalidSnapshot("snapshot is empty".into()));
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Run the preparation pipeline over this snapshot.
    pub fn into_report(self, preparer: &Preparer) -> ReportData {
        preparer
            .prepare(self.customer, self.assessment, self.vulnerabilities)
            .with_delivery_date_time(self.delivery_date_time)
    }
}
