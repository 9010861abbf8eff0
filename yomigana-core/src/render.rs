//! Reassembly of runs and allocations into annotated segments

use crate::segment::{Run, RunKind};

/// One piece of annotated output: base text plus an optional overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RubySegment {
    /// Base text as it appears in the output.
    pub text: String,
    /// Phonetic gloss rendered over the base text, when present.
    pub reading: Option<String>,
}

impl RubySegment {
    /// A segment without an overlay.
    pub fn plain<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            reading: None,
        }
    }

    /// A segment carrying a phonetic overlay.
    pub fn annotated<T: Into<String>, R: Into<String>>(text: T, reading: R) -> Self {
        Self {
            text: text.into(),
            reading: Some(reading.into()),
        }
    }
}

/// Pairs each ideographic run with its allocation, in original run order.
///
/// Ideographic runs with a non-empty allocation become annotated segments;
/// kana and other runs, and ideographic runs left without mora, pass
/// through as plain text.
pub fn render_runs(runs: &[Run], allocations: &[String]) -> Vec<RubySegment> {
    let mut next = allocations.iter();
    runs.iter()
        .map(|run| match run.kind {
            RunKind::Ideographic => match next.next() {
                Some(reading) if !reading.is_empty() => {
                    RubySegment::annotated(run.text.as_str(), reading.as_str())
                }
                _ => RubySegment::plain(run.text.as_str()),
            },
            _ => RubySegment::plain(run.text.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    #[test]
    fn annotated_run_carries_its_reading() {
        let runs = segment("食べる");
        let segments = render_runs(&runs, &["た".to_string()]);
        assert_eq!(
            segments,
            vec![
                RubySegment::annotated("食", "た"),
                RubySegment::plain("べる"),
            ]
        );
    }

    #[test]
    fn empty_allocation_renders_plain() {
        let runs = segment("一つ目");
        let segments = render_runs(&runs, &["ひと".to_string(), String::new()]);
        assert_eq!(
            segments,
            vec![
                RubySegment::annotated("一", "ひと"),
                RubySegment::plain("つ"),
                RubySegment::plain("目"),
            ]
        );
    }

    #[test]
    fn allocations_follow_run_order() {
        let runs = segment("振り仮名");
        let segments = render_runs(&runs, &["ふ".to_string(), "りがな".to_string()]);
        assert_eq!(
            segments,
            vec![
                RubySegment::annotated("振", "ふ"),
                RubySegment::plain("り"),
                RubySegment::annotated("仮名", "りがな"),
            ]
        );
    }
}
