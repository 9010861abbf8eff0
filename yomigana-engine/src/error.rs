//! Engine error types

use thiserror::Error;

/// Errors raised while setting up the annotation engine.
///
/// The annotation pipeline itself is infallible: unannotatable tokens
/// degrade to pass-through, so only initialization and I/O can fail.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The analyzer dictionary could not be opened or decoded
    #[error("dictionary load failed: {0}")]
    DictionaryLoad(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reported by the vibrato backend
    #[cfg(feature = "vibrato")]
    #[error(transparent)]
    Vibrato(#[from] vibrato::errors::VibratoError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
