//! Output formatting module

use anyhow::Result;
use yomigana_engine::RubySegment;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output one annotated input line
    fn format_line(&mut self, segments: &[RubySegment]) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
