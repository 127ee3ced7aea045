//! Indent-tagged line record

use crate::config::DEFAULT_QUOTE_MARKER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single line of an entry with its quote depth
///
/// `indent` counts how many quote markers apply to the line (0 = unquoted).
/// A line whose `text` is empty is blank, whatever its indent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Line {
    indent: usize,
    text: String,
}

impl Line {
    /// Create a line with an explicit quote depth
    pub fn new(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
        }
    }

    /// Create an unquoted line
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(0, text)
    }

    /// Create a blank line at depth 0
    pub fn blank() -> Self {
        Self::default()
    }

    /// Quote depth of the line
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Content with quote markers stripped
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the line separates paragraphs
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Render the line with `marker` repeated `indent` times in front
    pub fn render(&self, marker: &str) -> String {
        let mut out = marker.repeat(self.indent);
        out.push_str(&self.text);
        out
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indent {
            f.write_str(DEFAULT_QUOTE_MARKER)?;
        }
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_has_no_indent() {
        let line = Line::plain("che ricordarsi del tempo felice");
        assert_eq!(line.indent(), 0);
        assert_eq!(line.text(), "che ricordarsi del tempo felice");
        assert!(!line.is_blank());
    }

    #[test]
    fn test_blank_regardless_of_indent() {
        assert!(Line::blank().is_blank());
        assert!(Line::new(3, "").is_blank());
    }

    #[test]
    fn test_display_restores_markers() {
        assert_eq!(Line::new(2, "Deep").to_string(), "> > Deep");
        assert_eq!(Line::plain("Plain").to_string(), "Plain");
    }

    #[test]
    fn test_render_with_custom_marker() {
        assert_eq!(Line::new(2, "Deep").render("| "), "| | Deep");
    }
}
