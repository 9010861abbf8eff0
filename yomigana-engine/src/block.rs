//! Line-break-preserving annotation of markup blocks

use once_cell::sync::Lazy;
use regex::Regex;

use crate::annotator::RubyAnnotator;

static BR_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid pattern"));
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid pattern"));

/// Annotates a markup block: `<br>` variants become newline sentinels, all
/// other tags are stripped, the plain text goes through the annotator, and
/// the sentinels come back as `<br>`.
pub(crate) fn annotate_block_with(annotator: &RubyAnnotator, markup: &str) -> String {
    if !annotator.is_ready() {
        return markup.to_string();
    }
    let with_breaks = BR_TAG.replace_all(markup, "\n");
    let plain = ANY_TAG.replace_all(&with_breaks, "");
    let annotated = annotator.annotate(&plain);
    annotated.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AnalyzerHandle, MorphologicalAnalyzer};
    use std::sync::Arc;
    use yomigana_core::Token;

    struct LineAware;

    impl MorphologicalAnalyzer for LineAware {
        fn tokenize(&self, text: &str) -> Vec<Token> {
            // One token per character; only 猫 gets a reading.
            text.chars()
                .map(|ch| match ch {
                    '猫' => Token::new("猫", "ネコ"),
                    other => Token::new(other.to_string(), ""),
                })
                .collect()
        }
    }

    fn annotator() -> RubyAnnotator {
        RubyAnnotator::new(AnalyzerHandle::preloaded(Arc::new(LineAware)))
    }

    #[test]
    fn br_tags_survive_annotation() {
        let out = annotate_block_with(&annotator(), "猫<br>犬<BR/>鳥");
        assert_eq!(
            out,
            "<ruby><rb>猫</rb><rt>ねこ</rt></ruby><br>犬<br>鳥"
        );
    }

    #[test]
    fn other_markup_is_stripped() {
        let out = annotate_block_with(&annotator(), "<strong>猫</strong>だ");
        assert_eq!(out, "<ruby><rb>猫</rb><rt>ねこ</rt></ruby>だ");
    }

    #[test]
    fn plain_block_passes_through() {
        let out = annotate_block_with(&annotator(), "ただの行<br>もう一行");
        assert_eq!(out, "ただの行<br>もう一行");
    }

    #[test]
    fn not_ready_returns_markup_verbatim() {
        let annotator = RubyAnnotator::new(AnalyzerHandle::disabled());
        let markup = "<p>猫<br>犬</p>";
        assert_eq!(annotate_block_with(&annotator, markup), markup);
    }
}
