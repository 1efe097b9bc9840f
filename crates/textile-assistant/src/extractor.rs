//! Turn raw completions into validated answer records
//!
//! Completions are untrusted text. The model may answer with bare JSON, wrap it
//! in a markdown code block, surround it with prose, stop halfway through, or
//! apologise instead of answering. The extractor locates the JSON object, hands
//! it to the schema, and classifies every failure.
//!
//! It checks shape only. Whether the named product really is in the catalog is
//! left to the completion itself.

use crate::config::ExtractorConfig;
use crate::error::ExtractionError;
use crate::schema;
use serde_json::Value;
use textile_domain::AnswerRecord;
use tracing::debug;

/// A decoded candidate payload
#[derive(Debug)]
enum Payload {
    Object(Value),
    Null,
}

/// Extracts answer records from raw completion text
#[derive(Debug, Clone)]
pub struct ResponseExtractor {
    config: ExtractorConfig,
    not_found_phrases: Vec<String>,
}

impl ResponseExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        let not_found_phrases = config
            .not_found_phrases
            .iter()
            .map(|p| normalize(p))
            .collect();
        Self {
            config,
            not_found_phrases,
        }
    }

    /// Extract an answer record from a raw completion
    ///
    /// Tries, in order: the whole text as JSON, the body of a markdown code
    /// block, then the first balanced `{ ... }` block that decodes as an object.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the payload is `null` or `{}`, or if no object is present
    ///   and the text contains a configured not-found phrase
    /// - `MalformedPayload` if no object can be decoded
    /// - `SchemaViolation` if the object fails validation
    pub fn extract(&self, raw: &str) -> Result<AnswerRecord, ExtractionError> {
        let text = raw.trim();

        let value = match self.locate(text) {
            Some(Payload::Object(value)) => value,
            Some(Payload::Null) => {
                return Err(ExtractionError::NotFound(
                    "the service returned an empty answer".to_string(),
                ));
            }
            None if self.signals_not_found(text) => {
                return Err(ExtractionError::NotFound(self.excerpt(text)));
            }
            None => {
                return Err(ExtractionError::MalformedPayload {
                    excerpt: self.excerpt(text),
                });
            }
        };

        if value.as_object().is_some_and(|obj| obj.is_empty()) {
            return Err(ExtractionError::NotFound(
                "the service returned an empty answer".to_string(),
            ));
        }

        Ok(schema::validate(&value)?)
    }

    fn locate(&self, text: &str) -> Option<Payload> {
        if let Some(payload) = decode(text) {
            debug!("Decoded completion as bare JSON");
            return Some(payload);
        }

        if let Some(payload) = fenced_body(text).and_then(decode) {
            debug!("Decoded JSON from code block");
            return Some(payload);
        }

        let block = first_object_block(text);
        if block.is_some() {
            debug!("Decoded JSON object embedded in prose");
        }
        block
    }

    fn signals_not_found(&self, text: &str) -> bool {
        let text = normalize(text);
        self.not_found_phrases
            .iter()
            .any(|phrase| text.contains(phrase.as_str()))
    }

    fn excerpt(&self, text: &str) -> String {
        let limit = self.config.excerpt_chars;
        let mut excerpt: String = text.chars().take(limit).collect();
        if text.chars().nth(limit).is_some() {
            excerpt.push_str("...");
        }
        excerpt
    }
}

impl Default for ResponseExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

/// Lowercase and fold typographic apostrophes
fn normalize(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}

/// Decode text as a JSON object or `null`
fn decode(text: &str) -> Option<Payload> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(value @ Value::Object(_)) => Some(Payload::Object(value)),
        Ok(Value::Null) => Some(Payload::Null),
        _ => None,
    }
}

/// Body of the first markdown code block, with or without a language tag
///
/// An unterminated block runs to the end of the text.
fn fenced_body(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after = &text[start + 3..];
    let body = &after[after.find('\n')? + 1..];
    let end = body.find("```").unwrap_or(body.len());
    Some(&body[..end])
}

/// First balanced `{ ... }` block that decodes as a non-empty JSON object
///
/// Empty `{}` blocks inside prose are skipped.
fn first_object_block(text: &str) -> Option<Payload> {
    text.match_indices('{').find_map(|(start, _)| {
        let end = balanced_end(text, start)?;
        match serde_json::from_str::<Value>(&text[start..end]) {
            Ok(Value::Object(obj)) if !obj.is_empty() => Some(Payload::Object(Value::Object(obj))),
            _ => None,
        }
    })
}

/// Byte offset just past the bracket closing the one at `start`
///
/// Brackets inside JSON strings are skipped.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        /// Property: a valid payload survives any surrounding prose without braces
        #[test]
        fn test_payload_found_in_prose(
            before in "[a-zA-Z .,:!\n]{0,40}",
            after in "[a-zA-Z .,:!\n]{0,40}",
            cents in 0u32..1_000_000,
        ) {
            let price = f64::from(cents) / 100.0;
            let payload = json!({
                "product_name": "Linen Button-Up Shirt",
                "material": "100% Linen",
                "sizes_available": ["S", "M", "XL"],
                "price": price,
                "care_instructions": "Machine wash cold. Iron on a low setting.",
            });
            let raw = format!("{}{}{}", before, payload, after);

            let answer = ResponseExtractor::default().extract(&raw).unwrap();
            prop_assert_eq!(answer.price, price);
            prop_assert_eq!(answer.sizes_available, vec!["S", "M", "XL"]);
        }

        /// Property: extraction never panics and is deterministic
        #[test]
        fn test_extract_total_and_deterministic(raw in "\\PC{0,200}") {
            let extractor = ResponseExtractor::default();
            prop_assert_eq!(extractor.extract(&raw), extractor.extract(&raw));
        }
    }
}
