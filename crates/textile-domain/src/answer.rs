//! Answer record - the structured reply produced for one query

/// A validated answer about a single product
///
/// An `AnswerRecord` only exists once every required field has been checked;
/// there is no partially filled state. It is built fresh for each query and
/// dropped after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    /// Name of the textile product
    pub product_name: String,

    /// Primary material of the product
    pub material: String,

    /// Sizes in stock, in the order given by the service
    pub sizes_available: Vec<String>,

    /// Price in USD
    pub price: f64,

    /// Washing and drying instructions
    pub care_instructions: String,
}

impl AnswerRecord {
    /// Sizes joined for display (e.g., "S, M, L")
    pub fn sizes_display(&self) -> String {
        self.sizes_available.join(", ")
    }

    /// Price formatted in USD with two decimals (e.g., "$25.00")
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}
