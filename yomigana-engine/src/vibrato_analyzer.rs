//! Vibrato-backed morphological analyzer
//!
//! Wraps a compiled [vibrato](https://docs.rs/vibrato) dictionary behind
//! the [`MorphologicalAnalyzer`] contract. Readings come from the
//! MeCab-style feature string of each token; the IPADIC layout keeps the
//! katakana reading in column 7.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use vibrato::{Dictionary, Tokenizer};

use yomigana_core::Token;

use crate::analyzer::{AnalyzerHandle, MorphologicalAnalyzer};
use crate::config::DEFAULT_READING_FIELD;
use crate::error::{EngineError, Result};

/// Morphological analyzer backed by a compiled vibrato dictionary.
pub struct VibratoAnalyzer {
    tokenizer: Tokenizer,
    reading_field: usize,
}

impl VibratoAnalyzer {
    /// Loads a dictionary from `path`; `.zst` files are decompressed on
    /// the fly.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| EngineError::DictionaryLoad(format!("{}: {e}", path.display())))?;
        let dict = if path.extension().is_some_and(|ext| ext == "zst") {
            Dictionary::read(zstd::Decoder::new(file)?)?
        } else {
            Dictionary::read(file)?
        };
        tracing::info!("dictionary loaded from {}", path.display());
        Ok(Self {
            tokenizer: Tokenizer::new(dict),
            reading_field: DEFAULT_READING_FIELD,
        })
    }

    /// Overrides the feature column the reading is taken from.
    pub fn reading_field(mut self, field: usize) -> Self {
        self.reading_field = field;
        self
    }

    /// Starts loading the dictionary at `path` on a background thread and
    /// returns the readiness handle for it.
    pub fn spawn<P: Into<PathBuf>>(path: P) -> AnalyzerHandle {
        Self::spawn_with_field(path, DEFAULT_READING_FIELD)
    }

    /// [`spawn`](Self::spawn) with an explicit reading feature column.
    pub fn spawn_with_field<P: Into<PathBuf>>(path: P, field: usize) -> AnalyzerHandle {
        let path = path.into();
        AnalyzerHandle::spawn(move || {
            Self::from_path(&path).map(|analyzer| {
                Arc::new(analyzer.reading_field(field)) as Arc<dyn MorphologicalAnalyzer>
            })
        })
    }
}

impl MorphologicalAnalyzer for VibratoAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        (0..worker.num_tokens())
            .map(|i| {
                let token = worker.token(i);
                let reading = token
                    .feature()
                    .split(',')
                    .nth(self.reading_field)
                    .filter(|reading| *reading != "*")
                    .unwrap_or("");
                Token::new(token.surface(), reading)
            })
            .collect()
    }
}
