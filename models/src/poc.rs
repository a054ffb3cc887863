use serde::{Deserialize, Serialize};

use crate::{HighlightRange, Highlighted};

/// Kind of proof-of-concept item.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PocKind {
    #[default]
    Text,
    RequestResponse,
    Image,
}

impl PocKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PocKind::Text => "text",
            PocKind::RequestResponse => "request-response",
            PocKind::Image => "image",
        }
    }
}

impl std::fmt::Display for PocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single proof-of-concept step attached to a vulnerability.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PocItem {
    /// Display position; items are ordered by it with ties kept in input order.
    pub index: i64,
    #[serde(rename = "type")]
    pub kind: PocKind,
    pub description: String,
    pub uri: String,
    pub request: String,
    pub response: String,
    pub image_filename: String,
    pub image_caption: String,
    pub text_language: String,
    pub text_data: String,

    pub request_highlights: Vec<HighlightRange>,
    pub response_highlights: Vec<HighlightRange>,
    pub text_highlights: Vec<HighlightRange>,

    // Computed during preparation; never read from input.
    #[serde(skip_deserializing)]
    pub request_highlighted: Vec<Highlighted>,
    #[serde(skip_deserializing)]
    pub response_highlighted: Vec<Highlighted>,
    #[serde(skip_deserializing)]
    pub text_highlighted: Vec<Highlighted>,
}

impl PocItem {
    pub fn text(index: i64, data: impl Into<String>) -> Self {
        Self { index, kind: PocKind::Text, text_data: data.into(), ..Self::default() }
    }

    pub fn request_response(
        index: i64,
        request: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            index,
            kind: PocKind::RequestResponse,
            request: request.into(),
            response: response.into(),
            ..Self::default()
        }
    }

    pub fn image(index: i64, filename: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            index,
            kind: PocKind::Image,
            image_filename: filename.into(),
            image_caption: caption.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_text_highlights(mut self, ranges: Vec<HighlightRange>) -> Self {
        self.text_highlights = ranges;
        self
    }

    pub fn with_request_highlights(mut self, ranges: Vec<HighlightRange>) -> Self {
        self.request_highlights = ranges;
        self
    }

    pub fn with_response_highlights(mut self, ranges: Vec<HighlightRange>) -> Self {
        self.response_highlights = ranges;
        self
    }
}

/// Ordered proof-of-concept list of a vulnerability.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Poc {
    pub items: Vec<PocItem>,
}

impl Poc {
    pub fn new(items: Vec<PocItem>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&PocKind::RequestResponse).unwrap();
        assert_eq!(json, "\"request-response\"");
    }

    #[test]
    fn computed_segments_are_not_read_from_input() {
        let json = r#"{
            "index": 2,
            "type": "text",
            "text_data": "hello",
            "text_highlighted": [{"text": "forged", "color": "FF0000"}]
        }"#;
        let item: PocItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.index, 2);
        assert_eq!(item.text_data, "hello");
        assert!(item.text_highlighted.is_empty());
    }
}
