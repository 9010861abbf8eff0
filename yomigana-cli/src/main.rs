//! Command-line interface for yomigana ruby annotation

use anyhow::Result;
use clap::{Parser, Subcommand};

use yomigana_cli::commands::{annotate::AnnotateArgs, tokens::TokensArgs};

/// Annotates Japanese text with phonetic ruby glosses
#[derive(Debug, Parser)]
#[command(name = "yomigana", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Annotate text from files or stdin
    Annotate(AnnotateArgs),
    /// Dump analyzer tokens with their readings
    Tokens(TokensArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Annotate(args) => args.execute(),
        Command::Tokens(args) => args.execute(),
    }
}
