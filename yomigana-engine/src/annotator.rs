//! Public annotation entry point

use yomigana_core::{annotate_tokens, RubySegment};

use crate::analyzer::AnalyzerHandle;
use crate::block::annotate_block_with;
use crate::config::EngineConfig;
use crate::tree::{walk, AnnotatableNode};

/// Main entry point for ruby annotation.
///
/// Holds the analyzer readiness handle and the engine configuration; all
/// annotation calls are synchronous, linear in the input length, and never
/// fail. Before the analyzer is ready (or forever, when its initialization
/// failed) every call is a well-defined pass-through.
#[derive(Clone, Debug)]
pub struct RubyAnnotator {
    analyzer: AnalyzerHandle,
    config: EngineConfig,
}

impl RubyAnnotator {
    /// Creates an annotator with default configuration.
    pub fn new(analyzer: AnalyzerHandle) -> Self {
        Self::with_config(analyzer, EngineConfig::default())
    }

    /// Creates an annotator with custom configuration.
    pub fn with_config(analyzer: AnalyzerHandle, config: EngineConfig) -> Self {
        Self { analyzer, config }
    }

    /// True once the analyzer has finished initializing successfully.
    pub fn is_ready(&self) -> bool {
        self.analyzer.is_ready()
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Annotates `text`, returning it with ruby markup over kanji runs.
    ///
    /// Pass-through (the input returned verbatim) when the analyzer is not
    /// ready; tokens that cannot be annotated pass through individually.
    pub fn annotate(&self, text: &str) -> String {
        match self.annotate_to_segments(text) {
            Some(segments) => self.config.markup.write_segments(&segments),
            None => text.to_string(),
        }
    }

    /// Structured variant of [`annotate`](Self::annotate): the segment list
    /// for programmatic consumers, or `None` before readiness.
    pub fn annotate_to_segments(&self, text: &str) -> Option<Vec<RubySegment>> {
        let analyzer = self.analyzer.get()?;
        Some(annotate_tokens(&analyzer.tokenize(text)))
    }

    /// Annotates a markup block while preserving its line-break structure.
    ///
    /// `<br>` variants are normalized to newlines, any other markup is
    /// stripped, the plain text is annotated, and the newlines are
    /// restored as `<br>`. Pass-through (the markup returned verbatim)
    /// when the analyzer is not ready.
    pub fn annotate_block(&self, markup: &str) -> String {
        annotate_block_with(self, markup)
    }

    /// Annotates the text-bearing leaves of a node tree in place.
    ///
    /// Subtrees that are already ruby annotations, and containers whose
    /// content is not prose, are skipped; applying the walker twice
    /// therefore yields the same tree as applying it once. Does nothing
    /// before the analyzer is ready.
    pub fn apply_to_tree<N: AnnotatableNode>(&self, root: &mut N) {
        if !self.is_ready() {
            return;
        }
        walk(self, root);
    }
}
