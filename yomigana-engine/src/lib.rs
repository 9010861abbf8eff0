//! Annotation orchestration for yomigana
//!
//! This crate wires the pure algorithms of `yomigana-core` to the outside
//! world: the morphological-analyzer boundary with its one-time readiness
//! signal, the public [`RubyAnnotator`] entry point, markup formatting,
//! and the block and tree walkers that annotate structured content in
//! place.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use yomigana_core::Token;
//! use yomigana_engine::{AnalyzerHandle, MorphologicalAnalyzer, RubyAnnotator};
//!
//! struct OneWord;
//!
//! impl MorphologicalAnalyzer for OneWord {
//!     fn tokenize(&self, text: &str) -> Vec<Token> {
//!         vec![Token::new(text, "ガッコウ")]
//!     }
//! }
//!
//! let annotator = RubyAnnotator::new(AnalyzerHandle::preloaded(Arc::new(OneWord)));
//! assert_eq!(
//!     annotator.annotate("学校"),
//!     "<ruby><rb>学校</rb><rt>がっこう</rt></ruby>"
//! );
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod annotator;
mod block;
pub mod config;
pub mod error;
pub mod markup;
pub mod tree;

#[cfg(feature = "vibrato")]
pub mod vibrato_analyzer;

pub use analyzer::{AnalyzerHandle, MorphologicalAnalyzer};
pub use annotator::RubyAnnotator;
pub use config::{EngineConfig, EngineConfigBuilder, DEFAULT_READING_FIELD};
pub use error::{EngineError, Result};
pub use markup::MarkupStyle;
pub use tree::{AnnotatableNode, MarkupNode};

#[cfg(feature = "vibrato")]
pub use vibrato_analyzer::VibratoAnalyzer;

// Re-export the value types consumers hold on to.
pub use yomigana_core::{RubySegment, Token};
