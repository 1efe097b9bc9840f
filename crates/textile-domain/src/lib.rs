//! Textile Assistant Domain Layer
//!
//! This crate contains the domain model shared by every other layer of the
//! textile assistant. It defines the value types and trait interfaces the
//! infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Product**: An immutable catalog entry (material, sizes, price, care)
//! - **Catalog**: The read-only set of products, loaded once at startup
//! - **Answer Record**: The validated, typed answer produced for one query
//! - **Completion Provider**: The boundary to the external text-generation service
//!
//! ## Architecture
//!
//! - No I/O and no infrastructure dependencies (only `thiserror`)
//! - Pure data and invariants only
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answer;
pub mod catalog;
pub mod product;
pub mod traits;

// Re-exports for convenience
pub use answer::AnswerRecord;
pub use catalog::{Catalog, CatalogError};
pub use product::Product;
