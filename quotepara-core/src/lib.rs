//! Quote-depth inference and paragraph segmentation
//!
//! Raw lines of quoted correspondence or dialogue carry nested `"> "`
//! markers. This crate turns them into indent-tagged [`Line`]s and groups
//! those into [`Paragraph`]s:
//!
//! - **Line building**: the number of markers on a line is its indent; a line
//!   without markers continues at the previous line's indent.
//! - **Segmentation**: blank lines separate paragraphs, runs of blank lines
//!   count as one separator, and blank lines at either edge are dropped.
//!
//! Both stages are pure and never fail.
//!
//! # Example
//!
//! ```rust
//! use quotepara_core::{build_lines, paragraphs_of, Line};
//!
//! let lines = build_lines(["> Hello", "world", "", "> > Deep", "", "Plain"]);
//! assert_eq!(lines[1], Line::new(1, "world"));
//!
//! let paragraphs = paragraphs_of(&lines);
//! assert_eq!(paragraphs.len(), 3);
//! assert_eq!(paragraphs[1], vec![Line::new(2, "Deep")]);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod entry;
pub mod error;
pub mod line;
pub mod paragraph;
pub mod segmenter;

pub use builder::{build_lines, LineBuilder};
pub use config::{Config, ConfigBuilder, DEFAULT_QUOTE_MARKER};
pub use entry::Entry;
pub use error::{Error, Result};
pub use line::Line;
pub use paragraph::Paragraph;
pub use segmenter::{paragraphs_of, trim_blank_edges, ParagraphSegmenter};

/// Build lines and paragraphs for a whole text in one call
pub fn process_text(text: &str, config: &Config) -> (Entry, Vec<Paragraph>) {
    let entry = LineBuilder::with_config(config.clone()).build_text(text);
    let paragraphs = entry.paragraphs_with(config);
    (entry, paragraphs)
}
