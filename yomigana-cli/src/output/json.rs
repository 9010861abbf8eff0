//! JSON output formatter

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use yomigana_engine::RubySegment;

use super::OutputFormatter;

/// JSON formatter - outputs annotated lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// The line's base text, without annotations
    pub text: String,
    /// The annotated segments covering the line
    pub segments: Vec<RubySegment>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            lines: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, segments: &[RubySegment]) -> Result<()> {
        self.lines.push(LineData {
            text: segments.iter().map(|s| s.text.as_str()).collect(),
            segments: segments.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.lines)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_object_per_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter
                .format_line(&[
                    RubySegment::annotated("食", "た"),
                    RubySegment::plain("べる"),
                ])
                .unwrap();
            formatter.finish().unwrap();
        }
        let parsed: Vec<LineData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, "食べる");
        assert_eq!(parsed[0].segments.len(), 2);
        assert_eq!(parsed[0].segments[0].reading.as_deref(), Some("た"));
    }
}
