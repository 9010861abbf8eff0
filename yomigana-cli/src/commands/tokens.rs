//! Tokens command implementation
//!
//! Dumps the analyzer's surface/reading pairs, one token per line with an
//! `EOS` marker after each input line, for dictionary inspection.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use yomigana_engine::{MorphologicalAnalyzer, VibratoAnalyzer};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::read_sources;

/// Arguments for the tokens command
#[derive(Debug, Args)]
pub struct TokensArgs {
    /// Input files (default: stdin; `-` also reads stdin)
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Compiled analyzer dictionary (plain or zstd-compressed)
    #[arg(short, long, value_name = "FILE", env = "YOMIGANA_DICT")]
    pub dictionary: Option<PathBuf>,

    /// Feature column the reading is taken from
    #[arg(long, value_name = "N")]
    pub reading_field: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TokensArgs {
    /// Execute the tokens command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let dictionary = self
            .dictionary
            .clone()
            .or_else(|| config.analyzer.dictionary.clone())
            .ok_or(CliError::MissingDictionary)?;
        let reading_field = self.reading_field.unwrap_or(config.analyzer.reading_field);

        log::info!("loading dictionary from {}", dictionary.display());
        let analyzer = VibratoAnalyzer::from_path(&dictionary)
            .with_context(|| format!("failed to load dictionary {}", dictionary.display()))?
            .reading_field(reading_field);

        let sources = read_sources(&self.inputs)?;
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for source in &sources {
            for line in source.lines() {
                for token in analyzer.tokenize(line) {
                    writeln!(out, "{}\t{}", token.surface, token.reading)?;
                }
                writeln!(out, "EOS")?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
