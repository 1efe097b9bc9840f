//! Configuration for the response extractor

use serde::{Deserialize, Serialize};

/// Phrases the service uses to say a product is not in the catalog
pub const DEFAULT_NOT_FOUND_PHRASES: &[&str] = &[
    "cannot find",
    "can't find",
    "could not find",
    "couldn't find",
    "unable to find",
    "not found",
    "does not exist",
    "doesn't exist",
    "no such product",
    "no matching product",
];

/// Configuration for the response extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Case-insensitive phrases that mark a not-found reply
    pub not_found_phrases: Vec<String>,

    /// Characters of raw text quoted in malformed-payload errors
    pub excerpt_chars: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.excerpt_chars == 0 {
            return Err("excerpt_chars must be greater than 0".to_string());
        }
        if self.not_found_phrases.iter().any(|p| p.trim().is_empty()) {
            return Err("not_found_phrases must not contain empty phrases".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            not_found_phrases: DEFAULT_NOT_FOUND_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            excerpt_chars: 120,
        }
    }
}
