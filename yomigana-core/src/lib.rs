//! Core algorithms for ruby (furigana) annotation of Japanese text
//!
//! Given tokens from a morphological analyzer, this crate decides how much
//! of each token's phonetic reading belongs above each contiguous kanji
//! run. The pipeline for one token:
//!
//! 1. **Segmentation**: the surface is split into maximal same-script runs
//!    (ideographic / kana / other), kana folded to hiragana.
//! 2. **Trimming**: kana already spelled out at the head or tail of the
//!    surface is removed from the reading, leaving the residual owed to
//!    the ideographic runs.
//! 3. **Mora splitting**: the residual is partitioned into phonological
//!    mora, merging small kana and prolongation marks backward and the
//!    geminate mark forward.
//! 4. **Allocation**: mora are distributed across ideographic runs in
//!    proportion to their character counts, every run keeping at least one
//!    mora while any remain, the last run absorbing rounding drift.
//! 5. **Rendering**: runs are reassembled in order, ideographic runs
//!    carrying their allocated reading as an overlay.
//!
//! Every function here is pure and total: no input produces an error, and
//! tokens that cannot be annotated faithfully pass through untouched. The
//! companion engine crate wires these functions to an analyzer and to
//! markup and tree output.
//!
//! # Example
//!
//! ```rust
//! use yomigana_core::{annotate_token, Token};
//!
//! let segments = annotate_token(&Token::new("食べる", "タベル"));
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].text, "食");
//! assert_eq!(segments[0].reading.as_deref(), Some("た"));
//! assert_eq!(segments[1].text, "べる");
//! assert_eq!(segments[1].reading, None);
//! ```

#![warn(missing_docs)]

pub mod allocate;
pub mod annotate;
pub mod mora;
pub mod reading;
pub mod render;
pub mod script;
pub mod segment;

pub use allocate::allocate_mora;
pub use annotate::{annotate_token, annotate_tokens, Token};
pub use mora::split_mora;
pub use reading::trim_reading;
pub use render::{render_runs, RubySegment};
pub use script::{fold_katakana, fold_reading, is_ideographic, is_kana};
pub use segment::{segment, Run, RunKind};
