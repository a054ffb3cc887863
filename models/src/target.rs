use serde::{Deserialize, Serialize};

/// A host or service in scope of an assessment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    pub ipv4: String,
    pub ipv6: String,
    pub port: u16,
    pub protocol: String,
    pub fqdn: String,
    /// Short label used to group findings in the report.
    pub tag: String,
}

impl Target {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    pub fn with_fqdn(mut self, fqdn: impl Into<String>) -> Self {
        self.fqdn = fqdn.into();
        self
    }

    pub fn with_ipv4(mut self, ip: impl Into<String>) -> Self {
        self.ipv4 = ip.into();
        self
    }

    /// Display name of the target: the tag, else the first non-empty of
    /// fqdn, ipv4 and ipv6.
    pub fn name(&self) -> &str {
        [&self.tag, &self.fqdn, &self.ipv4, &self.ipv6]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
            .unwrap_or("")
    }
}
