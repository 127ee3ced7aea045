//! Quote-depth inference for raw lines
//!
//! Each raw line is split on the quote marker. The number of markers gives
//! the line's depth; a line without markers continues at the depth of the
//! line before it, so a quoted block only needs markers on its first line.

use crate::config::Config;
use crate::entry::Entry;
use crate::line::Line;

/// Builds indent-tagged lines from raw text lines
#[derive(Debug, Clone, Default)]
pub struct LineBuilder {
    config: Config,
}

impl LineBuilder {
    /// Create a builder with the default `"> "` marker
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Marker this builder counts
    pub fn quote_marker(&self) -> &str {
        &self.config.quote_marker
    }

    /// Convert raw lines into indent-tagged lines, one per input line
    pub fn build_lines<I, S>(&self, raw_lines: I) -> Vec<Line>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let iter = raw_lines.into_iter();
        let mut lines = Vec::with_capacity(iter.size_hint().0);
        let mut last_indent = 0;

        for raw in iter {
            let line = self.parse_line(raw.as_ref(), last_indent);
            last_indent = line.indent();
            lines.push(line);
        }

        log::trace!("Built {} lines", lines.len());
        lines
    }

    /// Build an entry from raw lines
    pub fn build<I, S>(&self, raw_lines: I) -> Entry
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Entry::new(self.build_lines(raw_lines))
    }

    /// Build an entry from a whole text, one raw line per physical line
    pub fn build_text(&self, text: &str) -> Entry {
        self.build(text.lines())
    }

    fn parse_line(&self, raw: &str, last_indent: usize) -> Line {
        let mut segments: Vec<&str> = raw.split(self.quote_marker()).collect();
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }

        // Nothing but markers, or nothing at all
        let Some(text) = segments.last() else {
            return Line::blank();
        };

        let depth = segments.len() - 1;
        let indent = if depth == 0 { last_indent } else { depth };
        Line::new(indent, *text)
    }
}

/// Convert raw lines using the default configuration
pub fn build_lines<I, S>(raw_lines: I) -> Vec<Line>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LineBuilder::new().build_lines(raw_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indents(lines: &[Line]) -> Vec<usize> {
        lines.iter().map(Line::indent).collect()
    }

    #[test]
    fn test_empty_input() {
        let lines = build_lines(Vec::<String>::new());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_unmarked_first_line_is_unquoted() {
        let lines = build_lines(["plain"]);
        assert_eq!(lines, vec![Line::plain("plain")]);
    }

    #[test]
    fn test_marker_count_sets_indent() {
        let lines = build_lines(["> one", "> > two", "> > > three"]);
        assert_eq!(indents(&lines), vec![1, 2, 3]);
        assert_eq!(lines[2].text(), "three");
    }

    #[test]
    fn test_continuation_inherits_indent() {
        let lines = build_lines(["> > He did", "The cloudy messenger", "> LORD", "again"]);
        assert_eq!(indents(&lines), vec![2, 2, 1, 1]);
    }

    #[test]
    fn test_empty_string_is_unquoted_blank() {
        let lines = build_lines(["> quoted", "", "after"]);
        assert_eq!(lines[1], Line::blank());
        assert_eq!(lines[2], Line::plain("after"));
    }

    #[test]
    fn test_marker_only_line_is_unquoted_blank() {
        let lines = build_lines(["> > quoted", "> ", "> > "]);
        assert_eq!(lines[1], Line::blank());
        assert_eq!(lines[2], Line::blank());
    }

    #[test]
    fn test_text_after_last_marker() {
        let lines = build_lines(["a> b"]);
        assert_eq!(lines, vec![Line::new(1, "b")]);
    }

    #[test]
    fn test_trailing_marker_is_dropped() {
        let lines = build_lines(["> Hello > "]);
        assert_eq!(lines, vec![Line::new(1, "Hello ")]);
    }

    #[test]
    fn test_marker_without_space_is_text() {
        let lines = build_lines([">no space"]);
        assert_eq!(lines, vec![Line::plain(">no space")]);
    }

    #[test]
    fn test_custom_marker() {
        let config = Config::builder().quote_marker("| ").build().unwrap();
        let builder = LineBuilder::with_config(config);

        let lines = builder.build_lines(["| | nested", "> literal"]);
        assert_eq!(lines, vec![Line::new(2, "nested"), Line::new(2, "> literal")]);
    }

    #[test]
    fn test_build_text_splits_line_endings() {
        let entry = LineBuilder::new().build_text("> Hello\r\nworld\n\nPlain\n");
        assert_eq!(
            entry.lines(),
            &[
                Line::new(1, "Hello"),
                Line::new(1, "world"),
                Line::blank(),
                Line::new(0, "Plain"),
            ]
        );
    }
}
