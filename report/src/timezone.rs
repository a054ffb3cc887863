// report/src/timezone.rs: date layouts, and the IANA zone to country index
// used to pick one when a template does not ask for a specific style.

use std::collections::HashMap;
use std::fs;
use std::sync::OnceLock;

use log::debug;

const ZONE_TABLE: &str = "/usr/share/zoneinfo/zone1970.tab";

/// Order of the date parts in a rendered date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateLayout {
    /// `DD/MM/YYYY`
    #[default]
    DayMonthYear,
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `YYYY/MM/DD`
    YearMonthDay,
    /// `YYYY-MM-DD`
    Iso,
}

impl DateLayout {
    /// `chrono` format string for this layout.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateLayout::DayMonthYear => "%d/%m/%Y",
            DateLayout::MonthDayYear => "%m/%d/%Y",
            DateLayout::YearMonthDay => "%Y/%m/%d",
            DateLayout::Iso => "%Y-%m-%d",
        }
    }

    /// Parse a style name, case-insensitively. Unknown names give `None`.
    pub fn from_style(style: &str) -> Option<Self> {
        match style.trim().to_uppercase().as_str() {
            "US" | "MDY" => Some(DateLayout::MonthDayYear),
            "EU" | "DMY" => Some(DateLayout::DayMonthYear),
            "ISO" | "YYYY-MM-DD" | "Y-M-D" => Some(DateLayout::Iso),
            "YMD" => Some(DateLayout::YearMonthDay),
            _ => None,
        }
    }

    /// Customary layout for an ISO 3166 country code.
    pub fn for_country(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "US" => DateLayout::MonthDayYear,
            "JP" | "CN" | "KR" => DateLayout::YearMonthDay,
            _ => DateLayout::DayMonthYear,
        }
    }
}

/// Maps IANA zone names to the first country code tzdata lists for them.
#[derive(Clone, Debug, Default)]
pub struct ZoneIndex {
    zones: HashMap<String, String>,
}

impl ZoneIndex {
    /// Build from the contents of a `zone1970.tab` file.
    ///
    /// Rows are `codes TAB coordinates TAB zone [TAB comments]`; comments and
    /// malformed rows are skipped, and the first row for a zone wins.
    pub fn parse(table: &str) -> Self {
        let mut zones = HashMap::new();

        for line in table.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 3 {
                continue;
            }

            let zone = parts[2].trim();
            let code = parts[0].split(',').next().unwrap_or_default().trim();
            if zone.is_empty() || code.is_empty() {
                continue;
            }
            zones.entry(zone.to_string()).or_insert_with(|| code.to_uppercase());
        }

        Self { zones }
    }

    pub fn country(&self, zone: &str) -> Option<&str> {
        self.zones.get(zone).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Index over the system tzdata, read once per process. Empty when the
    /// table cannot be read.
    pub fn system() -> &'static ZoneIndex {
        static INDEX: OnceLock<ZoneIndex> = OnceLock::new();
        INDEX.get_or_init(|| match fs::read_to_string(ZONE_TABLE) {
            Ok(raw) => {
                let index = Self::parse(&raw);
                debug!("loaded {} zones from {ZONE_TABLE}", index.len());
                index
            }
            Err(e) => {
                debug!("{ZONE_TABLE} unavailable ({e}), dates use the default layout");
                Self::default()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "# tzdb timezone descriptions\n\
        #\n\
        IT\t+4154+01229\tEurope/Rome\n\
        US\t+404251-0740023\tAmerica/New_York\tEastern (most areas)\n\
        ch,DE,LI\t+4723+00832\tEurope/Zurich\n\
        JP\t+353916+1394441\tAsia/Tokyo\n\
        FR\t+4852+00220\tEurope/Rome\n\
        broken row\n\
        \t+0000+00000\tEtc/Nowhere\n";

    #[test]
    fn parse_zone_table() {
        let index = ZoneIndex::parse(TABLE);
        assert_eq!(index.len(), 4);
        assert_eq!(index.country("America/New_York"), Some("US"));
        assert_eq!(index.country("Europe/Zurich"), Some("CH"));
        assert_eq!(index.country("Europe/Rome"), Some("IT"));
        assert_eq!(index.country("Etc/Nowhere"), None);
        assert!(ZoneIndex::default().is_empty());
    }

    #[test]
    fn style_names() {
        assert_eq!(DateLayout::from_style("us"), Some(DateLayout::MonthDayYear));
        assert_eq!(DateLayout::from_style(" EU "), Some(DateLayout::DayMonthYear));
        assert_eq!(DateLayout::from_style("yyyy-mm-dd"), Some(DateLayout::Iso));
        assert_eq!(DateLayout::from_style("YMD"), Some(DateLayout::YearMonthDay));
        assert_eq!(DateLayout::from_style("weird"), None);
    }

    #[test]
    fn country_layouts() {
        assert_eq!(DateLayout::for_country("us"), DateLayout::MonthDayYear);
        assert_eq!(DateLayout::for_country("KR"), DateLayout::YearMonthDay);
        assert_eq!(DateLayout::for_country("IT"), DateLayout::DayMonthYear);
    }
}
