//! Product module - a single entry of the textile catalog

/// A textile product offered by the company
///
/// Products are immutable once constructed. The price is expressed in USD.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Short unique identifier (e.g., "T101")
    pub product_id: String,

    /// Display name
    pub name: String,

    /// Composition description (e.g., "100% Organic Cotton")
    pub material: String,

    /// Display color
    pub color: String,

    /// Size labels in display order
    pub available_sizes: Vec<String>,

    /// Price in USD
    pub price: f64,

    /// Free-text marketing description
    pub description: String,

    /// Washing and drying instructions
    pub care_instructions: String,
}
