//! Output formatting module

use anyhow::Result;
use quotepara_core::Paragraph;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the paragraphs of one source file
    fn format_entry(&mut self, source: &str, paragraphs: &[Paragraph]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
