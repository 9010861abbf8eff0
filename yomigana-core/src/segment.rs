//! Segmentation of a token surface into maximal same-script runs

use crate::script::{fold_katakana, is_ideographic, is_kana};

/// Script class of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunKind {
    /// Kanji and the marks grouped with them.
    Ideographic,
    /// Hiragana, katakana, or the prolongation mark.
    Kana,
    /// Anything else (Latin, digits, punctuation, whitespace).
    Other,
}

/// A maximal same-class substring of a token surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    /// Script class shared by every character of the run.
    pub kind: RunKind,
    /// Run text; kana runs are stored hiragana-folded.
    pub text: String,
}

fn classify(ch: char) -> RunKind {
    if is_ideographic(ch) {
        RunKind::Ideographic
    } else if is_kana(ch) {
        RunKind::Kana
    } else {
        RunKind::Other
    }
}

/// Splits `surface` into maximal same-class runs, in original order.
///
/// The runs cover the surface exactly, with no gaps or overlaps; kana runs
/// are folded to hiragana as they are collected.
pub fn segment(surface: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for ch in surface.chars() {
        let kind = classify(ch);
        let ch = if kind == RunKind::Kana {
            fold_katakana(ch)
        } else {
            ch
        };
        match runs.last_mut() {
            Some(run) if run.kind == kind => run.text.push(ch),
            _ => runs.push(Run {
                kind,
                text: ch.to_string(),
            }),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(surface: &str) -> Vec<(RunKind, String)> {
        segment(surface)
            .into_iter()
            .map(|r| (r.kind, r.text))
            .collect()
    }

    #[test]
    fn empty_surface_has_no_runs() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn kanji_then_okurigana() {
        assert_eq!(
            kinds("食べる"),
            vec![
                (RunKind::Ideographic, "食".to_string()),
                (RunKind::Kana, "べる".to_string()),
            ]
        );
    }

    #[test]
    fn interleaved_scripts() {
        assert_eq!(
            kinds("お茶の水ABC"),
            vec![
                (RunKind::Kana, "お".to_string()),
                (RunKind::Ideographic, "茶".to_string()),
                (RunKind::Kana, "の".to_string()),
                (RunKind::Ideographic, "水".to_string()),
                (RunKind::Other, "ABC".to_string()),
            ]
        );
    }

    #[test]
    fn katakana_runs_fold_to_hiragana() {
        assert_eq!(
            kinds("食べるバナナ"),
            vec![
                (RunKind::Ideographic, "食".to_string()),
                (RunKind::Kana, "べるばなな".to_string()),
            ]
        );
    }

    #[test]
    fn runs_cover_surface_exactly() {
        let surface = "昨日、カフェでcoffeeを飲んだ。";
        let rebuilt: String = segment(surface).iter().map(|r| r.text.as_str()).collect();
        // Folding aside, character counts must match one to one.
        assert_eq!(rebuilt.chars().count(), surface.chars().count());
    }
}
