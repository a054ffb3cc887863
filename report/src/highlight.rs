// report/src/highlight.rs: overlay colored ranges on a text and collapse
// them into an ordered list of escaped, single-color runs.
//
// The public entry point is [`segment`].  Ranges are normalized through a
// worklist into single-line, clamped spans, painted onto a per-call color
// grid in caller order (last write wins), and the grid is then walked in
// reading order to build the runs.

use std::collections::VecDeque;

use models::{HighlightRange, Highlighted, LineCol};

use crate::escape::escape_text;

// ───────────────────────── public API ─────────────────────────

/// Split `text` into runs according to `ranges`.
///
/// Concatenating the returned texts always yields `escape_text(text)`, no two
/// neighbouring runs share a color, and without ranges the whole text comes
/// back as a single uncolored run. Coordinates outside the text are clamped
/// or dropped, never rejected.
pub fn segment(text: &str, ranges: &[HighlightRange]) -> Vec<Highlighted> {
    if ranges.is_empty() {
        return vec![Highlighted::plain(escape_text(text))];
    }

    let lines = split_lines(text);
    let spans = normalize(&lines, ranges);

    let mut grid: Vec<Vec<&str>> = lines.iter().map(|l| vec![""; l.chars.len()]).collect();
    for span in &spans {
        let row = &mut grid[span.line];
        let end = span.end.min(row.len());
        for cell in row.iter_mut().take(end).skip(span.start) {
            *cell = span.color;
        }
    }

    collect_runs(&lines, &grid)
}

// ───────────────────────── lines ─────────────────────────

/// One line of the input, including its trailing `\n` when present.
struct Line {
    chars: Vec<char>,
    terminated: bool,
}

impl Line {
    fn len(&self) -> i64 {
        self.chars.len() as i64
    }

    /// Exclusive end column that still covers the line's final character.
    /// The terminator itself is never part of a multi-line highlight.
    fn end_col(&self) -> i64 {
        if self.terminated { self.len() } else { self.len() + 1 }
    }
}

/// Split after every `\n`. An empty text, or one ending in `\n`, has a final
/// empty line, so a text always has at least one line.
fn split_lines(text: &str) -> Vec<Line> {
    let mut lines: Vec<Line> = text
        .split_inclusive('\n')
        .map(|l| Line { chars: l.chars().collect(), terminated: l.ends_with('\n') })
        .collect();
    if text.is_empty() || text.ends_with('\n') {
        lines.push(Line { chars: Vec::new(), terminated: false });
    }
    lines
}

// ───────────────────────── normalization ─────────────────────────

/// A single-line range with 0-based, half-open character bounds.
#[derive(Debug, PartialEq)]
struct Span<'a> {
    line: usize,
    start: usize,
    end: usize,
    color: &'a str,
}

/// Reduce `ranges` to single-line spans, keeping caller order.
///
/// Multi-line ranges are split into their first line and the remainder, and
/// both halves go back to the front of the queue, so every split shortens the
/// pending work by one line and the loop is bounded by the line count.
fn normalize<'a>(lines: &[Line], ranges: &'a [HighlightRange]) -> Vec<Span<'a>> {
    let count = lines.len() as i64;
    let last = &lines[lines.len() - 1];

    let mut pending: VecDeque<(LineCol, LineCol, &'a str)> = ranges
        .iter()
        .map(|r| (r.start, r.end, r.color.as_str()))
        .collect();
    let mut spans = Vec::with_capacity(pending.len());

    while let Some((mut start, mut end, color)) = pending.pop_front() {
        if start.line > count {
            continue;
        }
        if start.line < 1 {
            start = LineCol::new(1, 1);
        }
        if end.line > count {
            end = LineCol::new(count, last.len());
        }
        if end.line < start.line {
            continue;
        }

        let line = &lines[(start.line - 1) as usize];

        if start.line != end.line {
            let first_end = LineCol::new(start.line, line.end_col());
            let rest_start = LineCol::new(start.line + 1, 1);
            pending.push_front((rest_start, end, color));
            pending.push_front((start, first_end, color));
            continue;
        }

        let start_col = start.col.min(line.len()).max(1);
        let end_col = end.col.min(line.end_col()).max(1);
        spans.push(Span {
            line: (start.line - 1) as usize,
            start: (start_col - 1) as usize,
            end: (end_col - 1) as usize,
            color,
        });
    }

    spans
}

// ───────────────────────── run collection ─────────────────────────

fn collect_runs(lines: &[Line], grid: &[Vec<&str>]) -> Vec<Highlighted> {
    let mut runs = Vec::new();
    let mut buf = String::new();
    let mut color = "";

    for (line, row) in lines.iter().zip(grid) {
        for (ch, &cell) in line.chars.iter().zip(row) {
            if cell != color {
                if !buf.is_empty() {
                    runs.push(Highlighted::new(escape_text(&buf), color));
                    buf.clear();
                }
                color = cell;
            }
            buf.push(*ch);
        }
    }
    if !buf.is_empty() {
        runs.push(Highlighted::new(escape_text(&buf), color));
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(sl: i64, sc: i64, el: i64, ec: i64, color: &str) -> HighlightRange {
        HighlightRange::span(sl, sc, el, ec, color)
    }

    fn h(text: &str, color: &str) -> Highlighted {
        Highlighted::new(text, color)
    }

    fn joined(runs: &[Highlighted]) -> String {
        runs.iter().map(|s| s.text.as_str()).collect()
    }

    fn assert_no_adjacent_duplicates(runs: &[Highlighted]) {
        for pair in runs.windows(2) {
            assert_ne!(pair[0].color, pair[1].color, "adjacent runs share a color: {runs:?}");
        }
    }

    // ── literal scenarios ──

    #[test]
    fn single_highlight() {
        let runs = segment(
            "This is a sample text for testing highlights.",
            &[r(1, 11, 1, 17, "FF0000")],
        );
        assert_eq!(runs, vec![
            h("This is a ", ""),
            h("sample", "FF0000"),
            h(" text for testing highlights.", ""),
        ]);
    }

    #[test]
    fn multiline_text_single_line_highlight() {
        let runs = segment(
            "This is line one.\nThis is line two.\nThis is line three.",
            &[r(2, 6, 2, 11, "FF5733")],
        );
        assert_eq!(runs, vec![
            h("This is line one.\nThis ", ""),
            h("is li", "FF5733"),
            h("ne two.\nThis is line three.", ""),
        ]);
    }

    #[test]
    fn multiple_highlights() {
        let runs = segment(
            "Highlighting multiple sections in this text.",
            &[r(1, 1, 1, 13, "00FF00"), r(1, 22, 1, 31, "0000FF")],
        );
        assert_eq!(runs, vec![
            h("Highlighting", "00FF00"),
            h(" multiple", ""),
            h(" sections", "0000FF"),
            h(" in this text.", ""),
        ]);
    }

    #[test]
    fn highlights_at_boundaries() {
        let runs = segment(
            "Boundary highlights.",
            &[r(1, 1, 1, 9, "123456"), r(1, 10, 1, 20, "654321")],
        );
        assert_eq!(runs, vec![
            h("Boundary", "123456"),
            h(" ", ""),
            h("highlights", "654321"),
            h(".", ""),
        ]);
    }

    // ── overlap ──

    #[test]
    fn last_write_wins() {
        let runs = segment("AB", &[r(1, 1, 1, 3, "red"), r(1, 1, 1, 2, "blue")]);
        assert_eq!(runs, vec![h("A", "blue"), h("B", "red")]);
    }

    #[test]
    fn partial_overlap_later_range_takes_precedence() {
        let runs = segment(
            "Overlapping highlights can be tricky.",
            &[r(1, 1, 1, 12, "FF00FF"), r(1, 5, 1, 23, "00FFFF")],
        );
        assert_eq!(runs, vec![
            h("Over", "FF00FF"),
            h("lapping highlights", "00FFFF"),
            h(" can be tricky.", ""),
        ]);
    }

    #[test]
    fn identical_bounds_later_color_wins_entirely() {
        let runs = segment("abcd", &[r(1, 2, 1, 4, "AAAAAA"), r(1, 2, 1, 4, "BBBBBB")]);
        assert_eq!(runs, vec![h("a", ""), h("bc", "BBBBBB"), h("d", "")]);
    }

    #[test]
    fn touching_ranges_with_same_color_merge() {
        let runs = segment("abcd", &[r(1, 1, 1, 3, "AAAAAA"), r(1, 3, 1, 5, "AAAAAA")]);
        assert_eq!(runs, vec![h("abcd", "AAAAAA")]);
    }

    // ── degenerate ranges ──

    #[test]
    fn no_ranges_returns_single_plain_run() {
        assert_eq!(segment("No highlights in this text.", &[]), vec![h("No highlights in this text.", "")]);
        assert_eq!(segment("", &[]), vec![h("", "")]);
        assert_eq!(segment("a < b", &[]), vec![h("a &lt; b", "")]);
    }

    #[test]
    fn range_past_end_of_text_is_dropped() {
        let runs = segment("abc", &[r(3, 1, 3, 2, "FF0000")]);
        assert_eq!(runs, vec![h("abc", "")]);
    }

    #[test]
    fn zero_width_range_contributes_nothing() {
        let runs = segment("abc", &[r(1, 2, 1, 2, "FF0000")]);
        assert_eq!(runs, vec![h("abc", "")]);
    }

    #[test]
    fn inverted_lines_are_dropped() {
        let runs = segment("ab\ncd", &[r(2, 1, 1, 2, "FF0000")]);
        assert_eq!(runs, vec![h("ab\ncd", "")]);
    }

    #[test]
    fn end_column_past_line_covers_final_character() {
        let runs = segment("abc", &[r(1, 2, 1, 99, "FF0000")]);
        assert_eq!(runs, vec![h("a", ""), h("bc", "FF0000")]);
    }

    #[test]
    fn end_line_past_text_clamps_to_last_line_length() {
        let runs = segment("ab\ncd", &[r(2, 1, 9, 9, "FF0000")]);
        assert_eq!(runs, vec![h("ab\n", ""), h("c", "FF0000"), h("d", "")]);
    }

    #[test]
    fn negative_coordinates_are_clamped() {
        let runs = segment("abc", &[r(-5, -5, 1, 2, "FF0000")]);
        assert_eq!(runs, vec![h("a", "FF0000"), h("bc", "")]);

        let runs = segment("abc", &[r(1, -3, 1, -1, "FF0000")]);
        assert_eq!(runs, vec![h("abc", "")]);
    }

    #[test]
    fn extreme_coordinates_do_not_panic() {
        let ranges = [
            r(i64::MIN, i64::MIN, i64::MAX, i64::MAX, "A"),
            r(i64::MAX, 1, i64::MAX, 1, "B"),
            r(1, i64::MAX, 1, i64::MIN, "C"),
        ];
        let runs = segment("one\ntwo", &ranges);
        assert_eq!(joined(&runs), "one\ntwo");
    }

    // ── multi-line ──

    #[test]
    fn range_across_two_lines_skips_the_terminator() {
        let runs = segment("ab\ncd", &[r(1, 2, 2, 2, "FF0000")]);
        assert_eq!(runs, vec![
            h("a", ""),
            h("b", "FF0000"),
            h("\n", ""),
            h("c", "FF0000"),
            h("d", ""),
        ]);
    }

    #[test]
    fn range_across_four_lines_is_split_recursively() {
        let runs = segment("ab\ncd\nef\ngh", &[r(1, 2, 4, 2, "X")]);
        assert_eq!(runs, vec![
            h("a", ""),
            h("b", "X"),
            h("\n", ""),
            h("cd", "X"),
            h("\n", ""),
            h("ef", "X"),
            h("\n", ""),
            h("g", "X"),
            h("h", ""),
        ]);
    }

    #[test]
    fn split_pieces_keep_their_priority() {
        // The later single-line range must still win over every piece of the
        // earlier multi-line one.
        let runs = segment("ab\ncd\nef", &[r(1, 1, 3, 3, "A"), r(2, 1, 2, 3, "B")]);
        assert_eq!(runs, vec![
            h("ab", "A"),
            h("\n", ""),
            h("cd", "B"),
            h("\n", ""),
            h("ef", "A"),
        ]);
    }

    #[test]
    fn trailing_newline_has_an_empty_last_line() {
        let runs = segment("ab\n", &[r(1, 1, 2, 1, "X")]);
        assert_eq!(runs, vec![h("ab", "X"), h("\n", "")]);
    }

    #[test]
    fn empty_text_with_ranges_yields_no_runs() {
        assert!(segment("", &[r(1, 1, 1, 5, "X")]).is_empty());
    }

    // ── escaping ──

    #[test]
    fn runs_are_escaped_individually() {
        let runs = segment("<a>&", &[r(1, 2, 1, 3, "X")]);
        assert_eq!(runs, vec![h("&lt;", ""), h("a", "X"), h("&gt;&amp;", "")]);
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let runs = segment("héllo wörld", &[r(1, 2, 1, 5, "X"), r(1, 8, 1, 9, "Y")]);
        assert_eq!(runs, vec![
            h("h", ""),
            h("éll", "X"),
            h("o w", ""),
            h("ö", "Y"),
            h("rld", ""),
        ]);
    }

    // ── properties ──

    /// Small deterministic generator so the property checks stay reproducible.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: i64) -> i64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((self.0 >> 33) % (bound as u64)) as i64
        }
    }

    #[test]
    fn round_trip_and_no_adjacent_duplicates() {
        let texts = [
            "",
            "x",
            "single line",
            "GET /login HTTP/1.1\nHost: example.com\nCookie: a=b&c=<d>\n\n",
            "tabs\tand\r\ncarriage returns\n\"quoted\" 'text'",
            "ünïcödé\nline ☕\n𝄞",
        ];
        let colors = ["", "FF0000", "00FF00", "0000FF"];
        let mut rng = Lcg(42);

        for text in texts {
            for _ in 0..200 {
                let n = rng.next(5);
                let ranges: Vec<HighlightRange> = (0..n)
                    .map(|_| {
                        r(
                            rng.next(8) - 2,
                            rng.next(30) - 3,
                            rng.next(8) - 2,
                            rng.next(30) - 3,
                            colors[rng.next(colors.len() as i64) as usize],
                        )
                    })
                    .collect();

                let runs = segment(text, &ranges);
                assert_eq!(joined(&runs), escape_text(text), "ranges: {ranges:?}");
                assert_no_adjacent_duplicates(&runs);
                assert!(runs.iter().all(|s| !s.text.is_empty() || runs.len() == 1));
            }
        }
    }

    // ── internals ──

    #[test]
    fn split_lines_keeps_terminators() {
        let lines = split_lines("a\nb");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars, vec!['a', '\n']);
        assert!(lines[0].terminated);
        assert!(!lines[1].terminated);

        assert_eq!(split_lines("").len(), 1);
        assert_eq!(split_lines("a\n").len(), 2);
    }

    #[test]
    fn normalize_splits_into_single_line_spans() {
        let lines = split_lines("ab\ncd\nef");
        let ranges = [r(1, 1, 3, 2, "X")];
        let spans = normalize(&lines, &ranges);
        assert_eq!(spans, vec![
            Span { line: 0, start: 0, end: 2, color: "X" },
            Span { line: 1, start: 0, end: 2, color: "X" },
            Span { line: 2, start: 0, end: 1, color: "X" },
        ]);
    }
}
