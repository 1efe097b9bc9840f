//! Query orchestration: compose, complete, extract

use crate::config::ExtractorConfig;
use crate::error::AssistantError;
use crate::extractor::ResponseExtractor;
use crate::prompt::PromptComposer;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Instant;
use textile_domain::traits::CompletionProvider;
use textile_domain::{AnswerRecord, Catalog};
use tracing::{debug, info};

/// Answers product questions with a completion provider
///
/// One query is one blocking round trip. Nothing is carried from one query to
/// the next.
pub struct Assistant<P>
where
    P: CompletionProvider,
{
    provider: P,
    composer: PromptComposer,
    extractor: ResponseExtractor,
}

impl<P> Assistant<P>
where
    P: CompletionProvider,
    P::Error: Display,
{
    /// Create a new Assistant
    pub fn new(provider: P, catalog: Arc<Catalog>, config: ExtractorConfig) -> Self {
        Self {
            provider,
            composer: PromptComposer::new(catalog),
            extractor: ResponseExtractor::new(config),
        }
    }

    /// The catalog answers are drawn from
    pub fn catalog(&self) -> &Catalog {
        self.composer.catalog()
    }

    /// Answer a single query
    ///
    /// # Errors
    ///
    /// - `AssistantError::Service` if the completion call fails
    /// - `AssistantError::Extraction` if the completion cannot be turned into
    ///   an answer record
    pub fn answer(&self, query: &str) -> Result<AnswerRecord, AssistantError> {
        let start = Instant::now();

        let prompt = self.composer.compose(query);
        debug!("Prompt length: {} chars", prompt.len());

        let raw = self.provider.complete(&prompt).map_err(|e| {
            debug!("Completion failed: {}", e);
            AssistantError::Service(e.to_string())
        })?;
        debug!("Completion length: {} chars", raw.len());

        let answer = self.extractor.extract(&raw).map_err(|e| {
            debug!("Extraction failed: {}", e);
            AssistantError::Extraction(e)
        })?;

        info!(
            "Answered with '{}' in {} ms",
            answer.product_name,
            start.elapsed().as_millis()
        );

        Ok(answer)
    }
}
