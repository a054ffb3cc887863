// report/src/escape.rs: XML text escaping for values bound into templates.

/// Character reference the escaper emits for a line feed.
const ENCODED_NEWLINE: &str = "&#xA;";

/// Escape `text` for use inside XML character data or attribute values.
///
/// Markup characters, quotes and the whitespace controls `\t`, `\n`, `\r`
/// become character references. Characters that are not allowed in XML at
/// all are replaced by U+FFFD.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str(ENCODED_NEWLINE),
            '\r' => out.push_str("&#xD;"),
            c if is_xml_char(c) => out.push(c),
            _ => out.push('\u{FFFD}'),
        }
    }
    out
}

/// Escape `text` and turn encoded line feeds back into literal `\n`.
///
/// The literal newline is what the document writers later replace with
/// their own paragraph or line-break markup, so the substitution has to run
/// after escaping, never before.
pub fn escape_text(text: &str) -> String {
    escape_xml(text).replace(ENCODED_NEWLINE, "\n")
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_plain_text_unchanged() {
        assert_eq!(escape_text("hello world"), "hello world");
    }

    #[test]
    fn escape_markup_characters() {
        assert_eq!(
            escape_text(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&#34;x&#34;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_xml_encodes_whitespace_controls() {
        assert_eq!(escape_xml("a\tb\r\nc"), "a&#x9;b&#xD;&#xA;c");
    }

    #[test]
    fn escape_text_keeps_literal_newlines() {
        assert_eq!(escape_text("line one\nline two"), "line one\nline two");
        assert_eq!(escape_text("a\r\nb"), "a&#xD;\nb");
    }

    #[test]
    fn escape_text_does_not_unescape_user_entities() {
        // A user-typed "&#xA;" is escaped first and must survive as text.
        assert_eq!(escape_text("&#xA;"), "&amp;#xA;");
    }

    #[test]
    fn invalid_xml_characters_are_replaced() {
        assert_eq!(escape_text("a\u{0}b\u{1B}c"), "a\u{FFFD}b\u{FFFD}c");
        assert_eq!(escape_text("\u{FFFE}"), "\u{FFFD}");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape_text("caffè ☕ 𝄞"), "caffè ☕ 𝄞");
    }
}
