//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use textile_assistant::ExtractorConfig;
use textile_domain::Catalog;
use textile_llm::ProviderConfig;
use tracing::{debug, info};

/// Directory under the home directory holding config and history.
const DATA_DIR: &str = ".textile-assistant";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Completion service settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Response extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Catalog file to use instead of the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable product details
    Text,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_or_default(path, Self::path())
    }

    fn load_or_default(path: Option<&Path>, default_path: Result<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = match default_path {
                    Ok(default) => default,
                    Err(e) => {
                        debug!("{}, using defaults", e);
                        return Ok(Self::default());
                    }
                };
                if !default.exists() {
                    debug!("No config file at {}, using defaults", default.display());
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&contents)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Serialize configuration to TOML text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.provider
            .validate()
            .map_err(|e| CliError::Config(format!("[provider] {}", e)))?;
        self.extractor
            .validate()
            .map_err(|e| CliError::Config(format!("[extractor] {}", e)))?;
        Ok(())
    }

    /// Read the API key from the process environment.
    pub fn api_key(&self) -> Result<String> {
        self.api_key_from(|name| std::env::var(name).ok())
    }

    /// Read the API key through a variable lookup.
    pub fn api_key_from<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = &self.provider.api_key_env;
        lookup(name)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| CliError::MissingCredential(name.clone()))
    }

    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.settings.catalog_path {
            Some(path) => Ok(textile_assistant::load_catalog(path)?),
            None => Ok(Catalog::builtin()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            history_size: default_history_size(),
            catalog_path: None,
        }
    }
}

/// Directory holding the config file and REPL history.
pub fn data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(DATA_DIR))
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Text);
        assert!(config.settings.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
[provider]
model = "davinci-002"

[settings]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.provider.model, "davinci-002");
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.settings.catalog_path = Some(PathBuf::from("/srv/catalog.toml"));
        let parsed = Config::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.settings.catalog_path, config.settings.catalog_path);
        assert_eq!(parsed.provider, config.provider);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(Config::from_toml("[provider"), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_validate_rejects_bad_provider() {
        let mut config = Config::default();
        config.provider.temperature = -1.0;
        match config.validate() {
            Err(CliError::Config(msg)) => assert!(msg.starts_with("[provider]")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\ncolor = false").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.settings.color);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = Config::load(Some(Path::new("/nonexistent/textile.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_without_home_directory() {
        let no_home = Err(CliError::Config("Could not find home directory".into()));
        let config = Config::load_or_default(None, no_home).unwrap();
        assert!(config.settings.color);
        assert_eq!(config.provider, ProviderConfig::default());
    }

    #[test]
    fn test_load_default_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(None, Ok(dir.path().join("config.toml"))).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_default_path_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\nformat = \"json\"\n").unwrap();

        let config = Config::load_or_default(None, Ok(path)).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_api_key_present() {
        let config = Config::default();
        let key = config
            .api_key_from(|name| (name == "OPENAI_API_KEY").then(|| "sk-test".to_string()))
            .unwrap();
        assert_eq!(key, "sk-test");
    }

    #[test]
    fn test_api_key_missing() {
        let config = Config::default();
        match config.api_key_from(|_| None) {
            Err(CliError::MissingCredential(name)) => assert_eq!(name, "OPENAI_API_KEY"),
            other => panic!("Expected missing credential, got {:?}", other),
        }
    }

    #[test]
    fn test_api_key_blank_is_missing() {
        let config = Config::default();
        let result = config.api_key_from(|_| Some("   ".to_string()));
        assert!(matches!(result, Err(CliError::MissingCredential(_))));
    }

    #[test]
    fn test_missing_credential_message() {
        let err = CliError::MissingCredential("OPENAI_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "OPENAI_API_KEY not found. Please set it in your environment or .env file."
        );
    }

    #[test]
    fn test_builtin_catalog_by_default() {
        assert_eq!(Config::default().load_catalog().unwrap().len(), 4);
    }

    #[test]
    fn test_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[products]]
product_id = "W1"
name = "Merino Scarf"
material = "100% Merino Wool"
color = "Burgundy"
available_sizes = ["One Size"]
price = 39.0
description = "Soft and warm."
care_instructions = "Hand wash cold. Dry flat."
"#
        )
        .unwrap();

        let mut config = Config::default();
        config.settings.catalog_path = Some(file.path().to_path_buf());

        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("W1").unwrap().name, "Merino Scarf");
    }

    #[test]
    fn test_catalog_file_missing() {
        let mut config = Config::default();
        config.settings.catalog_path = Some(PathBuf::from("/nonexistent/catalog.toml"));
        assert!(matches!(config.load_catalog(), Err(CliError::Catalog(_))));
    }
}
