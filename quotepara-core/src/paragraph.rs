//! Paragraph: a contiguous run of non-blank lines

use crate::line::Line;
use serde::{Deserialize, Serialize};

/// Non-empty run of non-blank lines taken from an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paragraph {
    lines: Vec<Line>,
}

impl Paragraph {
    /// Wrap lines collected by the segmenter; callers guarantee they are
    /// non-empty and contain no blank line
    pub(crate) fn from_lines(lines: Vec<Line>) -> Self {
        debug_assert!(!lines.is_empty());
        debug_assert!(lines.iter().all(|line| !line.is_blank()));
        Self { lines }
    }

    /// Lines of the paragraph in order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines, always at least one
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quote depth of the first line
    pub fn indent(&self) -> usize {
        self.lines.first().map(Line::indent).unwrap_or_default()
    }

    /// Iterate over the lines
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Take ownership of the lines
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}

impl PartialEq<Vec<Line>> for Paragraph {
    fn eq(&self, other: &Vec<Line>) -> bool {
        &self.lines == other
    }
}

impl PartialEq<[Line]> for Paragraph {
    fn eq(&self, other: &[Line]) -> bool {
        self.lines.as_slice() == other
    }
}

impl<'a> IntoIterator for &'a Paragraph {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl From<Paragraph> for Vec<Line> {
    fn from(paragraph: Paragraph) -> Self {
        paragraph.lines
    }
}
