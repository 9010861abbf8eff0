//! Plain text output formatter

use std::io::Write;

use anyhow::Result;
use yomigana_engine::{MarkupStyle, RubySegment};

use super::OutputFormatter;

/// Plain text formatter - readings rendered inline as `base(reading)`
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, segments: &[RubySegment]) -> Result<()> {
        writeln!(
            self.writer,
            "{}",
            MarkupStyle::Brackets.write_segments(segments)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
