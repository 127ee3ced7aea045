//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use quotepara_core::Paragraph;
use std::io::Write;

/// Markdown formatter - one section per source, paragraphs as nested
/// blockquotes
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    paragraph_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            paragraph_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_entry(&mut self, source: &str, paragraphs: &[Paragraph]) -> Result<()> {
        writeln!(self.writer, "## {source}")?;

        for paragraph in paragraphs {
            writeln!(self.writer)?;
            let lines = paragraph.lines();
            for (i, line) in lines.iter().enumerate() {
                write!(self.writer, "{}", line.render("> "))?;
                match lines.get(i + 1) {
                    // Close the deeper quote or the next line is read as a
                    // lazy continuation of it
                    Some(next) if next.indent() < line.indent() => {
                        writeln!(self.writer)?;
                        writeln!(self.writer, "{}", quote_gap(next.indent()))?;
                    }
                    Some(_) => writeln!(self.writer, "  ")?,
                    None => writeln!(self.writer)?,
                }
            }
            self.paragraph_count += 1;
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total paragraphs: {}*", self.paragraph_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// An empty blockquote line at `depth`, or a blank line at depth 0
fn quote_gap(depth: usize) -> String {
    vec![">"; depth].join(" ")
}
