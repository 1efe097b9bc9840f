//! Prompt composition for product questions

use crate::schema::{self, FormatInstructions};
use serde_json::{json, Value};
use std::sync::Arc;
use textile_domain::Catalog;

/// Renders the completion prompt for a user query
///
/// The catalog literal and format instructions are rendered once at
/// construction; `compose` only appends the query.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    catalog: Arc<Catalog>,
    product_data: String,
    format_instructions: FormatInstructions,
}

impl PromptComposer {
    /// Create a composer over a catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let product_data = render_catalog(&catalog);
        Self {
            catalog,
            product_data,
            format_instructions: schema::describe(),
        }
    }

    /// The catalog embedded in every prompt
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build the complete prompt for a query
    ///
    /// Any query is accepted. The query text is inserted verbatim and never
    /// expanded further.
    pub fn compose(&self, query: &str) -> String {
        let mut prompt = String::with_capacity(
            ASSISTANT_INSTRUCTIONS.len()
                + self.product_data.len()
                + self.format_instructions.as_str().len()
                + query.len()
                + 128,
        );

        // 1. Role and grounding rules
        prompt.push_str(ASSISTANT_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The full catalog
        prompt.push_str("Product Data:\n");
        prompt.push_str(&self.product_data);
        prompt.push_str("\n\n");

        // 3. Output contract
        prompt.push_str("Format the output as JSON according to the following schema:\n");
        prompt.push_str(self.format_instructions.as_str());
        prompt.push_str("\n\n");

        // 4. The question
        prompt.push_str("User Query: ");
        prompt.push_str(query);
        prompt.push_str("\nAssistant:\n");

        prompt
    }
}

/// Catalog as a pretty-printed JSON array, in catalog order
fn render_catalog(catalog: &Catalog) -> String {
    let products: Vec<Value> = catalog
        .iter()
        .map(|p| {
            json!({
                "product_id": p.product_id,
                "name": p.name,
                "material": p.material,
                "color": p.color,
                "available_sizes": p.available_sizes,
                "price": p.price,
                "description": p.description,
                "care_instructions": p.care_instructions,
            })
        })
        .collect();

    let value = Value::Array(products);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

const ASSISTANT_INSTRUCTIONS: &str = "You are a helpful assistant for a textile company. \
Your task is to provide detailed product information based on the user's query.

Use the following product data to answer the user's question. \
If the user asks about a product that doesn't exist in the data, state that you cannot find it.";

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> PromptComposer {
        PromptComposer::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn test_prompt_includes_query() {
        let prompt = composer().compose("What is the fleece jacket made of?");
        assert!(prompt.contains("User Query: What is the fleece jacket made of?\nAssistant:"));
    }

    #[test]
    fn test_prompt_includes_every_product() {
        let prompt = composer().compose("anything");
        for product in Catalog::builtin().iter() {
            assert!(prompt.contains(&product.product_id));
            assert!(prompt.contains(&product.name));
            assert!(prompt.contains(&product.care_instructions));
        }
    }

    #[test]
    fn test_prompt_includes_format_instructions() {
        let prompt = composer().compose("anything");
        assert!(prompt.contains(schema::describe().as_str()));
        assert!(prompt.contains("state that you cannot find it"));
    }

    #[test]
    fn test_prompt_section_order() {
        let prompt = composer().compose("q");
        let instructions = prompt.find("helpful assistant").unwrap();
        let data = prompt.find("Product Data:").unwrap();
        let format = prompt.find("Format the output as JSON").unwrap();
        let query = prompt.find("User Query:").unwrap();
        assert!(instructions < data && data < format && format < query);
    }

    #[test]
    fn test_catalog_is_structured_literal() {
        let rendered = render_catalog(&Catalog::builtin());
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 4);
        assert_eq!(parsed[2]["name"], "Recycled Polyester Fleece Jacket");
        assert_eq!(parsed[0]["available_sizes"], json!(["S", "M", "L", "XL"]));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let composer = composer();
        assert_eq!(composer.compose("linen shirt"), composer.compose("linen shirt"));
    }

    #[test]
    fn test_query_is_not_expanded() {
        let prompt = composer().compose("{format_instructions} {query}");
        assert!(prompt.ends_with("User Query: {format_instructions} {query}\nAssistant:\n"));
    }

    #[test]
    fn test_empty_query() {
        let prompt = composer().compose("");
        assert!(prompt.ends_with("User Query: \nAssistant:\n"));
    }
}
