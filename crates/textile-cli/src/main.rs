//! Textile Assistant - Interactive catalog assistant backed by a completion service.

use clap::Parser;
use std::sync::Arc;
use textile_assistant::Assistant;
use textile_cli::{repl, Cli, Config, Formatter};
use textile_llm::OpenAiProvider;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so answers stay clean on stdout)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> textile_cli::Result<()> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.provider.model = model;
    }
    config.validate()?;

    let api_key = config.api_key()?;
    let catalog = Arc::new(config.load_catalog()?);
    info!("Catalog has {} products", catalog.len());

    let provider = OpenAiProvider::new(config.provider.clone(), api_key)?;
    info!("Using model {}", provider.model());

    let assistant = Assistant::new(provider, catalog, config.extractor.clone());

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    repl::run_repl(&assistant, &formatter, &config.settings)
}
