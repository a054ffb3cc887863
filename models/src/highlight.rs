use serde::{Deserialize, Serialize};

/// A 1-indexed line/column position. Out-of-range values are tolerated and
/// clamped by the segmenter, so both fields are signed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct LineCol {
    pub line: i64,
    pub col: i64,
}

impl LineCol {
    pub fn new(line: i64, col: i64) -> Self {
        Self { line, col }
    }
}

/// A colored range over a text, covering `[start.col, end.col)`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct HighlightRange {
    pub start: LineCol,
    pub end: LineCol,
    /// Six hex digits, e.g. `FF0000`. Not validated.
    pub color: String,
}

impl HighlightRange {
    pub fn new(start: LineCol, end: LineCol, color: impl Into<String>) -> Self {
        Self { start, end, color: color.into() }
    }

    /// Shorthand taking `(start line, start col, end line, end col)`.
    pub fn span(
        start_line: i64,
        start_col: i64,
        end_line: i64,
        end_col: i64,
        color: impl Into<String>,
    ) -> Self {
        Self::new(
            LineCol::new(start_line, start_col),
            LineCol::new(end_line, end_col),
            color,
        )
    }
}

/// One run of text sharing a single highlight color; empty color means
/// no highlight.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Highlighted {
    pub text: String,
    pub color: String,
}

impl Highlighted {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self { text: text.into(), color: color.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, "")
    }

    pub fn is_highlighted(&self) -> bool {
        !self.color.is_empty()
    }
}
