//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use quotepara_core::{Line, Paragraph};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one object per source file
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<EntryData>,
}

/// Paragraphs of one source file
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryData {
    /// Source file path
    pub source: String,
    /// Paragraphs in order
    pub paragraphs: Vec<ParagraphData>,
}

/// One paragraph
#[derive(Debug, Serialize, Deserialize)]
pub struct ParagraphData {
    /// Zero-based position within the entry
    pub index: usize,
    /// Lines of the paragraph
    pub lines: Vec<LineData>,
}

/// One indent-tagged line
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LineData {
    /// Quote depth
    pub indent: usize,
    /// Text with quote markers stripped
    pub text: String,
}

impl From<&Line> for LineData {
    fn from(line: &Line) -> Self {
        Self {
            indent: line.indent(),
            text: line.text().to_string(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, source: &str, paragraphs: &[Paragraph]) -> Result<()> {
        let paragraphs = paragraphs
            .iter()
            .enumerate()
            .map(|(index, paragraph)| ParagraphData {
                index,
                lines: paragraph.iter().map(LineData::from).collect(),
            })
            .collect();

        self.entries.push(EntryData {
            source: source.to_string(),
            paragraphs,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotepara_core::{build_lines, paragraphs_of};

    #[test]
    fn test_compact_output() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        let paragraphs = paragraphs_of(&build_lines(["> > Deep", "", "Plain"]));

        formatter.format_entry("scene.txt", &paragraphs).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"[{"source":"scene.txt","paragraphs":["#,
                r#"{"index":0,"lines":[{"indent":2,"text":"Deep"}]},"#,
                r#"{"index":1,"lines":[{"indent":0,"text":"Plain"}]}]}]"#,
                "\n"
            )
        );
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.format_entry("empty.txt", &[]).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        let entries: Vec<EntryData> = serde_json::from_str(&out).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source, "empty.txt");
        assert!(entries[0].paragraphs.is_empty());
    }
}
