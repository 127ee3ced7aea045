//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use quotepara_core::Paragraph;
use std::io::Write;

/// Plain text formatter - re-quotes each line and separates paragraphs
/// with a single blank line
pub struct TextFormatter<W: Write> {
    writer: W,
    marker: String,
    show_headers: bool,
    entries_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, marker: impl Into<String>) -> Self {
        Self {
            writer,
            marker: marker.into(),
            show_headers: false,
            entries_written: 0,
        }
    }

    /// Print a `==> source <==` header before each entry
    pub fn with_headers(mut self, show_headers: bool) -> Self {
        self.show_headers = show_headers;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, source: &str, paragraphs: &[Paragraph]) -> Result<()> {
        if self.entries_written > 0 {
            writeln!(self.writer)?;
        }
        if self.show_headers {
            writeln!(self.writer, "==> {source} <==")?;
        }

        for (index, paragraph) in paragraphs.iter().enumerate() {
            if index > 0 {
                writeln!(self.writer)?;
            }
            for line in paragraph {
                writeln!(self.writer, "{}", line.render(&self.marker))?;
            }
        }

        self.entries_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
