// report/src/sanitize.rs: in-place XML escaping of every text field bound
// into a template, plus display ordering of findings and PoC items.

use models::{
    Assessment, Category, Customer, CvssVersion, Poc, PocItem, Target, Vector, Vulnerability,
};

use crate::escape::escape_text;

fn escape_in_place(field: &mut String) {
    *field = escape_text(field);
}

pub fn sanitize_customer(customer: &mut Customer) {
    escape_in_place(&mut customer.name);
    escape_in_place(&mut customer.language);
}

pub fn sanitize_assessment(assessment: &mut Assessment) {
    for target in &mut assessment.targets {
        sanitize_target(target);
    }

    escape_in_place(&mut assessment.name);
    escape_in_place(&mut assessment.language);
    escape_in_place(&mut assessment.status);
    escape_in_place(&mut assessment.kind.short);
    escape_in_place(&mut assessment.kind.full);
    escape_in_place(&mut assessment.environment);
    escape_in_place(&mut assessment.testing_type);
    escape_in_place(&mut assessment.osstmm_vector);
}

pub fn sanitize_target(target: &mut Target) {
    escape_in_place(&mut target.ipv4);
    escape_in_place(&mut target.ipv6);
    escape_in_place(&mut target.protocol);
    escape_in_place(&mut target.fqdn);
    escape_in_place(&mut target.tag);
}

/// `source` stays raw: it keys the per-source category counters.
pub fn sanitize_category(category: &mut Category) {
    escape_in_place(&mut category.identifier);
    escape_in_place(&mut category.name);
    escape_in_place(&mut category.generic_description);
    escape_in_place(&mut category.generic_remediation);
    for reference in &mut category.references {
        escape_in_place(reference);
    }
}

fn sanitize_vector(vector: &mut Vector) {
    escape_in_place(&mut vector.version);
    escape_in_place(&mut vector.vector);
    escape_in_place(&mut vector.description);
}

/// Escape every text field of `vulnerability`, including its PoC list,
/// which is put in display order in the same pass.
pub fn sanitize_vulnerability(vulnerability: &mut Vulnerability) {
    sanitize_and_sort_poc(&mut vulnerability.poc);

    sanitize_category(&mut vulnerability.category);
    escape_in_place(&mut vulnerability.detailed_title);
    escape_in_place(&mut vulnerability.status);

    for vector in vulnerability.cvss.iter_mut() {
        sanitize_vector(vector);
    }

    for reference in &mut vulnerability.references {
        escape_in_place(reference);
    }

    escape_in_place(&mut vulnerability.description);
    escape_in_place(&mut vulnerability.remediation);
    sanitize_target(&mut vulnerability.target);
}

/// Sanitize every vulnerability, then order the list by descending score at
/// `max_version`. The sort is stable; without a version the order is kept.
pub fn sanitize_and_sort_vulnerabilities(
    vulnerabilities: &mut [Vulnerability],
    max_version: Option<CvssVersion>,
) {
    for vulnerability in vulnerabilities.iter_mut() {
        sanitize_vulnerability(vulnerability);
    }

    if let Some(version) = max_version {
        vulnerabilities.sort_by(|a, b| {
            b.cvss.get(version).score.total_cmp(&a.cvss.get(version).score)
        });
    }
}

/// Sanitize the PoC items and stable-sort them by `index`.
///
/// Both happen here on purpose: callers rely on a sanitized PoC list always
/// being in display order.
pub fn sanitize_and_sort_poc(poc: &mut Poc) {
    for item in &mut poc.items {
        sanitize_poc_item(item);
    }
    poc.items.sort_by_key(|item| item.index);
}

/// Escape the descriptive fields of a PoC item.
///
/// `request`, `response` and `text_data` are left raw: their highlight
/// coordinates address the raw text, and the segmenter escapes every run it
/// produces from them.
pub fn sanitize_poc_item(item: &mut PocItem) {
    escape_in_place(&mut item.description);
    escape_in_place(&mut item.uri);
    escape_in_place(&mut item.image_filename);
    escape_in_place(&mut item.image_caption);
    escape_in_place(&mut item.text_language);
}
