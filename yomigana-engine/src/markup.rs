//! Serialization of annotated segments into output text

use yomigana_core::RubySegment;

/// Output flavor for annotated text.
///
/// Segment text is written as-is; callers embedding the result in a
/// larger document are responsible for escaping it for that context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkupStyle {
    /// HTML ruby elements: `<ruby><rb>食</rb><rt>た</rt></ruby>`.
    #[default]
    RubyTags,
    /// Inline parentheses for plain-text surfaces: `食(た)`.
    Brackets,
}

impl MarkupStyle {
    /// Renders `segments` in this style.
    pub fn write_segments(&self, segments: &[RubySegment]) -> String {
        let mut out = String::new();
        for segment in segments {
            match &segment.reading {
                Some(reading) => match self {
                    MarkupStyle::RubyTags => {
                        out.push_str("<ruby><rb>");
                        out.push_str(&segment.text);
                        out.push_str("</rb><rt>");
                        out.push_str(reading);
                        out.push_str("</rt></ruby>");
                    }
                    MarkupStyle::Brackets => {
                        out.push_str(&segment.text);
                        out.push('(');
                        out.push_str(reading);
                        out.push(')');
                    }
                },
                None => out.push_str(&segment.text),
            }
        }
        out
    }
}
