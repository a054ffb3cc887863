// report/src/template.rs: helpers the document writers call while binding
// [`ReportData`](crate::ReportData) into a template.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use models::{Complexity, Severity};

use crate::aggregate::OwaspCounter;
use crate::palette::Palette;
use crate::timezone::{DateLayout, ZoneIndex};

/// Color recorded for `identifier`, or the informational color when the
/// category has no findings.
pub fn owasp_color<'a>(counter: &'a OwaspCounter, identifier: &str, palette: &'a Palette) -> &'a str {
    counter
        .categories
        .get(identifier)
        .map(String::as_str)
        .unwrap_or_else(|| palette.severity_color(Severity::LOWEST))
}

/// Table-cell background marker for a severity, e.g.
/// `[[TABLE_CELL_BG_COLOR:#EE0000]]`.
pub fn table_severity_color(severity: Severity, palette: &Palette) -> String {
    cell_bg(palette.severity_color(severity))
}

/// Table-cell background marker for a complexity.
pub fn table_complexity_color(complexity: Option<Complexity>, palette: &Palette) -> String {
    cell_bg(palette.complexity_color(complexity))
}

fn cell_bg(color: &str) -> String {
    format!("[[TABLE_CELL_BG_COLOR:{}]]", color.to_uppercase())
}

/// Wrap already-escaped `text` in a WordprocessingML run shaded with `hex`.
///
/// `hex` may carry a leading `#`; anything that is not six characters after
/// that returns `text` untouched.
pub fn shade_text_bg(text: &str, hex: &str) -> String {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.chars().count() != 6 {
        return text.to_string();
    }
    format!(
        r#"<w:rPr><w:shd w:val="clear" w:color="auto" w:fill="{}"/></w:rPr><w:t>{}</w:t>"#,
        hex.to_uppercase(),
        text
    )
}

/// Date part of `at` as seen in `tz`, an IANA zone name. A missing or
/// unknown zone means UTC.
///
/// `style` (`US`, `EU`, `ISO`, `YMD`, `DMY`, `MDY`) picks the layout. Without
/// one the layout follows the country of `tz`, and day/month/year otherwise.
pub fn format_date(at: &DateTime<Utc>, tz: Option<&str>, style: Option<&str>) -> String {
    format_date_with(ZoneIndex::system(), at, tz, style)
}

fn format_date_with(
    index: &ZoneIndex,
    at: &DateTime<Utc>,
    tz: Option<&str>,
    style: Option<&str>,
) -> String {
    let tz = tz.filter(|z| !z.is_empty());

    let layout = match (style.filter(|s| !s.is_empty()), tz) {
        (Some(style), _) => DateLayout::from_style(style).unwrap_or_default(),
        (None, Some(zone)) => index.country(zone).map(DateLayout::for_country).unwrap_or_default(),
        (None, None) => DateLayout::default(),
    };

    let date = match tz.and_then(|z| z.parse::<Tz>().ok()) {
        Some(zone) => at.with_timezone(&zone).date_naive(),
        None => at.date_naive(),
    };
    date.format(layout.pattern()).to_string()
}
