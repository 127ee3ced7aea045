//! Paragraph segmentation
//!
//! Leading and trailing blank lines are dropped, then the remaining lines are
//! folded into paragraphs. A run of one or more blank lines closes the current
//! paragraph; indent is carried through and only consulted when
//! [`Config::split_on_indent_change`] is set.

use crate::config::Config;
use crate::line::Line;
use crate::paragraph::Paragraph;

/// Fold state: finished paragraphs and the one being filled
#[derive(Debug, Default)]
struct Fold {
    completed: Vec<Paragraph>,
    current: Vec<Line>,
}

impl Fold {
    fn close(mut self) -> Self {
        if !self.current.is_empty() {
            let lines = std::mem::take(&mut self.current);
            self.completed.push(Paragraph::from_lines(lines));
        }
        self
    }

    fn finish(self) -> Vec<Paragraph> {
        self.close().completed
    }
}

/// Splits a line sequence into paragraphs
#[derive(Debug, Clone, Default)]
pub struct ParagraphSegmenter {
    split_on_indent_change: bool,
}

impl ParagraphSegmenter {
    /// Segmenter splitting on blank lines only
    pub fn new() -> Self {
        Self::default()
    }

    /// Segmenter honouring the configuration's splitting rules
    pub fn with_config(config: &Config) -> Self {
        Self {
            split_on_indent_change: config.split_on_indent_change,
        }
    }

    /// Compute the paragraphs of `lines`
    pub fn segment(&self, lines: &[Line]) -> Vec<Paragraph> {
        let trimmed = trim_blank_edges(lines);
        if trimmed.is_empty() {
            return Vec::new();
        }

        let paragraphs = trimmed
            .iter()
            .fold(Fold::default(), |fold, line| self.step(fold, line))
            .finish();

        log::debug!(
            "Segmented {} lines ({} after trim) into {} paragraphs",
            lines.len(),
            trimmed.len(),
            paragraphs.len()
        );
        paragraphs
    }

    fn step(&self, fold: Fold, line: &Line) -> Fold {
        if line.is_blank() {
            // An empty current paragraph means the blank run continues
            return fold.close();
        }

        let mut fold = if self.indent_changes(&fold, line) {
            fold.close()
        } else {
            fold
        };
        fold.current.push(line.clone());
        fold
    }

    fn indent_changes(&self, fold: &Fold, line: &Line) -> bool {
        self.split_on_indent_change
            && fold
                .current
                .last()
                .is_some_and(|last| last.indent() != line.indent())
    }
}

/// Slice of `lines` between the first and last non-blank line, inclusive
///
/// Returns an empty slice when every line is blank.
pub fn trim_blank_edges(lines: &[Line]) -> &[Line] {
    let Some(start) = lines.iter().position(|line| !line.is_blank()) else {
        return &[];
    };
    // A non-blank line exists, so the reverse scan finds one too
    let end = lines
        .iter()
        .rposition(|line| !line.is_blank())
        .unwrap_or(start);
    &lines[start..=end]
}

/// Segment lines using the default configuration
pub fn paragraphs_of(lines: &[Line]) -> Vec<Paragraph> {
    ParagraphSegmenter::new().segment(lines)
}
