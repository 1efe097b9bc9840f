//! Textile Assistant CLI library.
//!
//! This library provides the interactive front end of the textile assistant:
//! argument parsing, configuration, the REPL loop and output formatting.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::Cli;
pub use config::{Config, OutputFormat, Settings};
pub use error::{CliError, Result};
pub use output::Formatter;
