//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// No dictionary configured for a command that requires one
    MissingDictionary,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MissingDictionary => {
                write!(f, "No dictionary configured (use --dictionary or YOMIGANA_DICT)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let error = CliError::FileNotFound("corpus.txt".to_string());
        assert_eq!(error.to_string(), "File not found: corpus.txt");
    }

    #[test]
    fn missing_dictionary_names_the_remedies() {
        let message = CliError::MissingDictionary.to_string();
        assert!(message.contains("--dictionary"));
        assert!(message.contains("YOMIGANA_DICT"));
    }

    #[test]
    fn error_trait_implementation() {
        let error = CliError::ConfigError("bad format".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{error:?}").contains("ConfigError"));
    }
}
