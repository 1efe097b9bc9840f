//! Textile Assistant
//!
//! Answers questions about the textile catalog with a completion service and
//! turns the free-form reply into a validated [`AnswerRecord`].
//!
//! # Architecture
//!
//! ```text
//! Query → PromptComposer → CompletionProvider → ResponseExtractor → AnswerRecord
//!              ↑                                       ↓
//!           Catalog + schema::describe()         schema::validate()
//! ```
//!
//! # Key Features
//!
//! - **Prompt Composition**: Full catalog and output schema in every prompt
//! - **Tolerant Extraction**: Bare JSON, code blocks, or JSON surrounded by prose
//! - **All-or-nothing Validation**: A record is never partially built
//! - **Classified Failures**: Malformed reply, schema violation, product not found,
//!   service error
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use textile_assistant::{Assistant, ExtractorConfig};
//! use textile_domain::Catalog;
//! use textile_llm::MockProvider;
//!
//! let llm = MockProvider::new(r#"{
//!     "product_name": "Linen Button-Up Shirt",
//!     "material": "100% Linen",
//!     "sizes_available": ["S", "M", "XL"],
//!     "price": 60.0,
//!     "care_instructions": "Machine wash cold. Iron on a low setting."
//! }"#);
//!
//! let assistant = Assistant::new(llm, Arc::new(Catalog::builtin()), ExtractorConfig::default());
//! let answer = assistant.answer("Tell me about the linen shirt").unwrap();
//!
//! assert_eq!(answer.price, 60.0);
//! ```
//!
//! [`AnswerRecord`]: textile_domain::AnswerRecord

#![warn(missing_docs)]

mod assistant;
mod catalog;
mod config;
mod error;
mod extractor;
mod prompt;
pub mod schema;


pub use assistant::Assistant;
pub use catalog::{load_catalog, parse_catalog};
pub use config::{ExtractorConfig, DEFAULT_NOT_FOUND_PHRASES};
pub use error::{AssistantError, CatalogLoadError, ExtractionError, SchemaError};
pub use extractor::ResponseExtractor;
pub use prompt::PromptComposer;
pub use schema::{describe, validate, FormatInstructions};
