// report/src/prepare.rs: the preparation pipeline.
//
// [`Preparer::prepare`] takes ownership of a fetched assessment snapshot and
// turns it into [`ReportData`]: sanitize, aggregate, then segment highlights,
// always in that order.  Nothing here performs I/O or can fail.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use models::{Assessment, Customer, CvssVersion, PocItem, Severity, Vector, Vulnerability};
use serde::Serialize;

use crate::aggregate::{self, OwaspCounter};
use crate::highlight::segment;
use crate::palette::Palette;
use crate::sanitize;

/// Render-ready report input handed to the document writers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportData {
    pub customer: Customer,
    pub assessment: Assessment,
    /// Sanitized, ordered by score, with highlight runs filled in.
    pub vulnerabilities: Vec<Vulnerability>,
    /// When the report is handed over, if the caller supplied it.
    pub delivery_date_time: Option<DateTime<Utc>>,
    /// Highest enabled CVSS version, if any.
    pub max_version: Option<CvssVersion>,
    /// Highest-scoring vector per enabled version.
    pub max_cvss: BTreeMap<CvssVersion, Vector>,
    /// Finding counts per version and severity.
    pub vulnerabilities_overview: BTreeMap<CvssVersion, BTreeMap<Severity, u32>>,
    /// Non-informational findings per target name.
    pub targets_category_counter: BTreeMap<String, u32>,
    /// Category summary per taxonomy source.
    pub owasp_counter: BTreeMap<String, OwaspCounter>,
}

impl ReportData {
    pub fn with_delivery_date_time(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.delivery_date_time = at;
        self
    }
}

/// Runs the preparation pipeline with a fixed [`Palette`].
#[derive(Clone, Debug, Default)]
pub struct Preparer {
    palette: Palette,
}

impl Preparer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Prepare one assessment. The inputs are consumed and rewritten in place.
    pub fn prepare(
        &self,
        mut customer: Customer,
        mut assessment: Assessment,
        mut vulnerabilities: Vec<Vulnerability>,
    ) -> ReportData {
        debug!("preparing report data for {} vulnerabilities", vulnerabilities.len());

        let max_version = aggregate::max_cvss_version(&assessment.cvss_versions);
        let enabled = assessment.enabled_versions();
        debug!("max CVSS version: {max_version:?}, enabled: {enabled:?}");

        sanitize::sanitize_customer(&mut customer);
        sanitize::sanitize_assessment(&mut assessment);
        sanitize::sanitize_and_sort_vulnerabilities(&mut vulnerabilities, max_version);

        let max_cvss = aggregate::max_cvss(&vulnerabilities, &enabled);
        debug!("max CVSS: {max_cvss:?}");

        let vulnerabilities_overview = aggregate::severity_overview(&vulnerabilities, &enabled);
        debug!("vulnerabilities overview: {vulnerabilities_overview:?}");

        let targets_category_counter = aggregate::target_counter(&vulnerabilities, max_version);
        debug!("targets category counter: {targets_category_counter:?}");

        let owasp_counter = aggregate::owasp_counter(&vulnerabilities, max_version, &self.palette);
        debug!("OWASP counter: {owasp_counter:?}");

        for vulnerability in &mut vulnerabilities {
            for item in &mut vulnerability.poc.items {
                fill_highlights(item);
            }
        }

        ReportData {
            customer,
            assessment,
            vulnerabilities,
            delivery_date_time: None,
            max_version,
            max_cvss,
            vulnerabilities_overview,
            targets_category_counter,
            owasp_counter,
        }
    }
}

/// Prepare with the default palette.
pub fn prepare(
    customer: Customer,
    assessment: Assessment,
    vulnerabilities: Vec<Vulnerability>,
) -> ReportData {
    Preparer::default().prepare(customer, assessment, vulnerabilities)
}

/// Segment each raw body of a PoC item with its own ranges.
fn fill_highlights(item: &mut PocItem) {
    item.request_highlighted = segment(&item.request, &item.request_highlights);
    item.response_highlighted = segment(&item.response, &item.response_highlights);
    item.text_highlighted = segment(&item.text_data, &item.text_highlights);
}
