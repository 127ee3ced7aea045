//! Entry: one parsed unit of input (a letter, a scene)

use crate::config::Config;
use crate::line::Line;
use crate::paragraph::Paragraph;
use crate::segmenter::ParagraphSegmenter;
use serde::{Deserialize, Serialize};

/// Ordered lines of one parsed unit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    lines: Vec<Line>,
}

impl Entry {
    /// Wrap an already built line sequence
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Lines in input order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines, blank ones included
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the entry holds no lines at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Paragraphs split on blank lines only
    pub fn paragraphs(&self) -> Vec<Paragraph> {
        ParagraphSegmenter::new().segment(&self.lines)
    }

    /// Paragraphs using the splitting rules of `config`
    pub fn paragraphs_with(&self, config: &Config) -> Vec<Paragraph> {
        ParagraphSegmenter::with_config(config).segment(&self.lines)
    }

    /// Take ownership of the lines
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}

impl From<Vec<Line>> for Entry {
    fn from(lines: Vec<Line>) -> Self {
        Self::new(lines)
    }
}

impl FromIterator<Line> for Entry {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
