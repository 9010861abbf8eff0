//! Per-token annotation pipeline and token-stream driver

use crate::allocate::allocate_mora;
use crate::mora::split_mora;
use crate::reading::trim_reading;
use crate::render::{render_runs, RubySegment};
use crate::script::{fold_reading, is_ideographic};
use crate::segment::{segment, RunKind};

/// One analyzer token: a surface form and its phonetic reading.
///
/// The reading may arrive in katakana or hiragana; it is folded to
/// hiragana before use. An empty reading marks a token the analyzer could
/// not voice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Surface form exactly as it occurs in the text.
    pub surface: String,
    /// Phonetic rendering of the whole surface, or empty.
    pub reading: String,
}

impl Token {
    /// Creates a token from a surface/reading pair.
    pub fn new<S: Into<String>, R: Into<String>>(surface: S, reading: R) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
        }
    }
}

/// Annotates a single token, returning its output segments.
///
/// An empty surface yields no segments. A surface without ideographic
/// characters, or a token without a reading, passes through as one plain
/// segment carrying the raw surface. A reading fully spelled out by the
/// surface kana also passes through: the pipeline never fabricates a
/// gloss. Otherwise the surface is segmented, the reading trimmed, and
/// the residual mora are allocated across the ideographic runs.
pub fn annotate_token(token: &Token) -> Vec<RubySegment> {
    if token.surface.is_empty() {
        return Vec::new();
    }
    if token.reading.is_empty() || !token.surface.chars().any(is_ideographic) {
        return vec![RubySegment::plain(token.surface.as_str())];
    }

    let runs = segment(&token.surface);
    let reading = fold_reading(&token.reading);
    let residual = trim_reading(&runs, &reading);
    if residual.is_empty() {
        return vec![RubySegment::plain(token.surface.as_str())];
    }

    let run_lens: Vec<usize> = runs
        .iter()
        .filter(|run| run.kind == RunKind::Ideographic)
        .map(|run| run.text.chars().count())
        .collect();
    let mora = split_mora(residual);
    let allocations = allocate_mora(&run_lens, &mora);
    render_runs(&runs, &allocations)
}

/// Runs the per-token pipeline over an ordered token stream and
/// concatenates the results.
///
/// Token order must match original text order; the output then covers the
/// analyzed text in order, annotated where a reading could be placed.
pub fn annotate_tokens(tokens: &[Token]) -> Vec<RubySegment> {
    tokens.iter().flat_map(annotate_token).collect()
}
