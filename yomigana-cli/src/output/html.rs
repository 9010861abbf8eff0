//! HTML output formatter

use std::io::Write;

use anyhow::Result;
use yomigana_engine::{MarkupStyle, RubySegment};

use super::OutputFormatter;

/// HTML formatter - one line of ruby markup per input line
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for HtmlFormatter<W> {
    fn format_line(&mut self, segments: &[RubySegment]) -> Result<()> {
        writeln!(
            self.writer,
            "{}<br>",
            MarkupStyle::RubyTags.write_segments(segments)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
