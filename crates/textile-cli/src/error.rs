//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// Every variant is a startup or terminal failure; errors from a single query
/// are handled inside the REPL and never surface here.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API key environment variable is unset or empty
    #[error("{0} not found. Please set it in your environment or .env file.")]
    MissingCredential(String),

    /// Catalog file could not be loaded
    #[error(transparent)]
    Catalog(#[from] textile_assistant::CatalogLoadError),

    /// Completion provider could not be created
    #[error("Provider error: {0}")]
    Provider(#[from] textile_llm::LlmError),

    /// Line editor failure
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CliError {
    /// Process exit status for a startup failure
    ///
    /// A missing credential ends the session normally after the message is
    /// printed; anything else is a failed start.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingCredential(_) => 0,
            _ => 1,
        }
    }
}
