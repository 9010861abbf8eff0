//! Input handling for the CLI

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;

use crate::error::{CliError, CliResult};

/// Reads every input source into a string: the named files in order, or
/// stdin when no file is given. `-` also names stdin.
pub fn read_sources(paths: &[PathBuf]) -> CliResult<Vec<String>> {
    if paths.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    paths
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                read_stdin()
            } else {
                std::fs::read_to_string(path)
                    .map_err(|_| CliError::FileNotFound(path.display().to_string()).into())
            }
        })
        .collect()
}

fn read_stdin() -> CliResult<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn named_files_are_read_in_order() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        write!(first, "いち").unwrap();
        write!(second, "に").unwrap();
        let sources = read_sources(&[
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ])
        .unwrap();
        assert_eq!(sources, vec!["いち".to_string(), "に".to_string()]);
    }

    #[test]
    fn missing_file_is_reported_by_name() {
        let err = read_sources(&[PathBuf::from("no/such/file.txt")]).unwrap_err();
        assert!(err.to_string().contains("no/such/file.txt"));
    }
}
