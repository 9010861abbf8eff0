//! Annotate command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use yomigana_engine::{AnalyzerHandle, RubyAnnotator, RubySegment, VibratoAnalyzer};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::read_sources;
use crate::output::{HtmlFormatter, JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Input files (default: stdin; `-` also reads stdin)
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: the configured format, or text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

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

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Readings inline as `base(reading)`, one line per input line
    Text,
    /// HTML ruby markup, one line per input line
    Html,
    /// JSON array of annotated lines
    Json,
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let annotator = self.build_annotator(&config)?;

        let sources = read_sources(&self.inputs)?;
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(
                || format!("failed to create output file {}", path.display()),
            )?)),
            None => Box::new(io::stdout().lock()),
        };
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, config.output.pretty_json))
            }
        };

        for source in &sources {
            for line in source.lines() {
                let segments = annotator
                    .annotate_to_segments(line)
                    .unwrap_or_else(|| vec![RubySegment::plain(line)]);
                formatter.format_line(&segments)?;
            }
        }
        formatter.finish()
    }

    /// Build the annotator: a preloaded analyzer when a dictionary is
    /// configured, a pass-through handle otherwise.
    fn build_annotator(&self, config: &CliConfig) -> Result<RubyAnnotator> {
        let dictionary = self
            .dictionary
            .clone()
            .or_else(|| config.analyzer.dictionary.clone());
        let handle = match dictionary {
            Some(path) => {
                log::info!("loading dictionary from {}", path.display());
                let reading_field = self
                    .reading_field
                    .unwrap_or(config.analyzer.reading_field);
                let analyzer = VibratoAnalyzer::from_path(&path)
                    .with_context(|| {
                        format!("failed to load dictionary {}", path.display())
                    })?
                    .reading_field(reading_field);
                AnalyzerHandle::preloaded(Arc::new(analyzer))
            }
            None => {
                log::warn!("no dictionary configured; output will be unannotated");
                AnalyzerHandle::disabled()
            }
        };
        Ok(RubyAnnotator::new(handle))
    }
}
