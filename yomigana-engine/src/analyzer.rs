//! Morphological analyzer boundary and readiness handling

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::thread;

use yomigana_core::Token;

use crate::error::EngineError;

/// Upstream contract for the external morphological analyzer.
///
/// Implementations must return tokens whose surfaces concatenate to the
/// input exactly, in order, with no reordering, duplication, or omission.
/// Each reading is either empty or a full phonetic rendering of its
/// token's surface; katakana readings are accepted and folded downstream.
pub trait MorphologicalAnalyzer: Send + Sync {
    /// Tokenizes `text` into ordered surface/reading pairs.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

type AnalyzerSlot = OnceLock<Option<Arc<dyn MorphologicalAnalyzer>>>;

/// Completion signal for the analyzer's one-time initialization.
///
/// The handle owns a write-once slot that the initialization step fills
/// exactly once: with the analyzer on success, or with nothing on failure.
/// Callers query the handle instead of reading ambient shared state;
/// before the slot is filled (and forever after a failed initialization)
/// every annotation call is a pass-through. No method blocks.
#[derive(Clone)]
pub struct AnalyzerHandle {
    slot: Arc<AnalyzerSlot>,
}

impl AnalyzerHandle {
    /// Runs `init` on a background thread; the handle becomes ready when
    /// it succeeds, or permanently unavailable when it fails.
    pub fn spawn<F>(init: F) -> Self
    where
        F: FnOnce() -> Result<Arc<dyn MorphologicalAnalyzer>, EngineError> + Send + 'static,
    {
        let slot: Arc<AnalyzerSlot> = Arc::new(OnceLock::new());
        let filler = Arc::clone(&slot);
        thread::spawn(move || {
            let outcome = match init() {
                Ok(analyzer) => Some(analyzer),
                Err(err) => {
                    tracing::warn!("analyzer initialization failed: {err}");
                    None
                }
            };
            let _ = filler.set(outcome);
        });
        Self { slot }
    }

    /// Wraps an analyzer that is ready immediately.
    pub fn preloaded(analyzer: Arc<dyn MorphologicalAnalyzer>) -> Self {
        let slot = OnceLock::new();
        let _ = slot.set(Some(analyzer));
        Self {
            slot: Arc::new(slot),
        }
    }

    /// A handle that never becomes ready; every call passes through.
    pub fn disabled() -> Self {
        let slot = OnceLock::new();
        let _ = slot.set(None);
        Self {
            slot: Arc::new(slot),
        }
    }

    /// True once initialization has completed successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self.slot.get(), Some(Some(_)))
    }

    /// The analyzer, when ready.
    pub fn get(&self) -> Option<Arc<dyn MorphologicalAnalyzer>> {
        self.slot.get().and_then(Clone::clone)
    }
}

impl fmt::Debug for AnalyzerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.slot.get() {
            None => "initializing",
            Some(None) => "unavailable",
            Some(Some(_)) => "ready",
        };
        f.debug_struct("AnalyzerHandle").field("state", &state).finish()
    }
}
