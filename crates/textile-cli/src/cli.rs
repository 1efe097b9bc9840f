//! CLI argument parsing.

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Textile Assistant - Ask questions about the textile product catalog.
///
/// Starts an interactive session. Type a question per line; type `exit` to quit.
#[derive(Debug, Parser)]
#[command(name = "textile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, env = "TEXTILE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Completion model to use (overrides the configuration file)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable product details (default)
    Text,
    /// JSON object per answer
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
