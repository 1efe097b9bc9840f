//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use textile_assistant::{AssistantError, ExtractionError};
use textile_domain::AnswerRecord;

/// Apology printed for every failed query.
pub const APOLOGY: &str = "I'm sorry, I couldn't find a product that matches your query or process your request. Please try again.";

const HEADER: &str = "--- Product Details ---";
const SEPARATOR: &str = "-----------------------";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a successful answer.
    pub fn format_answer(&self, answer: &AnswerRecord) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_answer_text(answer)),
            OutputFormat::Json => self.format_answer_json(answer),
        }
    }

    /// Format a failed query.
    pub fn format_failure(&self, error: &AssistantError) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(format!(
                "{}\n{}\n{}",
                self.colorize(APOLOGY, "yellow"),
                self.colorize(&format!("Error: {}", error), "red"),
                SEPARATOR
            )),
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "error": error_kind(error),
                    "message": error.to_string(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
        }
    }

    /// Fixed five-field layout.
    fn format_answer_text(&self, answer: &AnswerRecord) -> String {
        let lines = [
            self.colorize(HEADER, "cyan"),
            format!("{} {}", self.label("Product:"), answer.product_name),
            format!("{} {}", self.label("Material:"), answer.material),
            format!("{} {}", self.label("Available Sizes:"), answer.sizes_display()),
            format!("{} {}", self.label("Price:"), answer.price_display()),
            format!("{} {}", self.label("Care:"), answer.care_instructions),
            SEPARATOR.to_string(),
        ];
        lines.join("\n")
    }

    /// Format an answer as JSON.
    fn format_answer_json(&self, answer: &AnswerRecord) -> Result<String> {
        let value = serde_json::json!({
            "product_name": answer.product_name,
            "material": answer.material,
            "sizes_available": answer.sizes_available,
            "price": answer.price,
            "care_instructions": answer.care_instructions,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Session banner.
    pub fn welcome(&self) -> String {
        format!(
            "{}\n{}",
            self.colorize("Welcome to the Textile Company Assistant!", "green"),
            "Ask me about our products. Type 'exit' to quit."
        )
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    fn label(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Stable machine-readable name for an error kind.
pub fn error_kind(error: &AssistantError) -> &'static str {
    match error {
        AssistantError::Service(_) => "service_error",
        AssistantError::Extraction(ExtractionError::MalformedPayload { .. }) => "malformed_payload",
        AssistantError::Extraction(ExtractionError::SchemaViolation(_)) => "schema_violation",
        AssistantError::Extraction(ExtractionError::NotFound(_)) => "not_found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textile_assistant::SchemaError;

    fn create_test_answer() -> AnswerRecord {
        AnswerRecord {
            product_name: "Organic Cotton T-Shirt".to_string(),
            material: "100% Organic Cotton".to_string(),
            sizes_available: vec!["S".to_string(), "M".to_string(), "L".to_string(), "XL".to_string()],
            price: 25.0,
            care_instructions: "Machine wash cold, tumble dry low.".to_string(),
        }
    }

    #[test]
    fn test_text_format() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_answer(&create_test_answer()).unwrap();
        assert_eq!(
            output,
            "--- Product Details ---\n\
             Product: Organic Cotton T-Shirt\n\
             Material: 100% Organic Cotton\n\
             Available Sizes: S, M, L, XL\n\
             Price: $25.00\n\
             Care: Machine wash cold, tumble dry low.\n\
             -----------------------"
        );
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_answer(&create_test_answer()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["price"], 25.0);
        assert_eq!(parsed["sizes_available"][3], "XL");
    }

    #[test]
    fn test_text_failure() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let error = AssistantError::Service("Communication error: timed out".to_string());
        let output = formatter.format_failure(&error).unwrap();
        assert!(output.starts_with(APOLOGY));
        assert!(output.contains("Error: Completion service error: Communication error: timed out"));
        assert!(output.ends_with(SEPARATOR));
    }

    #[test]
    fn test_json_failure() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let error: AssistantError = ExtractionError::NotFound("no kimono".to_string()).into();
        let output = formatter.format_failure(&error).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["error"], "not_found");
        assert_eq!(parsed["message"], "No matching product: no kimono");
    }

    #[test]
    fn test_error_kinds() {
        let malformed: AssistantError = ExtractionError::MalformedPayload {
            excerpt: "x".to_string(),
        }
        .into();
        let violation: AssistantError =
            ExtractionError::SchemaViolation(SchemaError::MissingField("price".to_string())).into();

        assert_eq!(error_kind(&malformed), "malformed_payload");
        assert_eq!(error_kind(&violation), "schema_violation");
        assert_eq!(error_kind(&AssistantError::Service("x".to_string())), "service_error");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.error("test"), "✗ test");
        assert_eq!(formatter.info("test"), "ℹ test");
    }

    #[test]
    fn test_welcome() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert!(formatter.welcome().contains("Type 'exit' to quit."));
    }
}
