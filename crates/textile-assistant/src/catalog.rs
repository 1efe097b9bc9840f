//! Catalog files
//!
//! A catalog file is TOML with one `[[products]]` table per product:
//!
//! ```toml
//! [[products]]
//! product_id = "T101"
//! name = "Organic Cotton T-Shirt"
//! material = "100% Organic Cotton"
//! color = "Natural Beige"
//! available_sizes = ["S", "M", "L", "XL"]
//! price = 25.0
//! description = "A classic, soft t-shirt."
//! care_instructions = "Machine wash cold, tumble dry low."
//! ```

use crate::error::CatalogLoadError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use textile_domain::{Catalog, Product};
use tracing::info;

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    products: Vec<RawProduct>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProduct {
    product_id: String,
    name: String,
    material: String,
    color: String,
    available_sizes: Vec<String>,
    price: f64,
    description: String,
    care_instructions: String,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Product {
            product_id: raw.product_id,
            name: raw.name,
            material: raw.material,
            color: raw.color,
            available_sizes: raw.available_sizes,
            price: raw.price,
            description: raw.description,
            care_instructions: raw.care_instructions,
        }
    }
}

/// Parse a catalog from TOML text
pub fn parse_catalog(toml_str: &str) -> Result<Catalog, CatalogLoadError> {
    let raw: RawCatalog = toml::from_str(toml_str)?;
    let products = raw.products.into_iter().map(Product::from).collect();
    Ok(Catalog::new(products)?)
}

/// Load a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let contents = fs::read_to_string(path)?;
    let catalog = parse_catalog(&contents)?;
    info!("Loaded {} products from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textile_domain::CatalogError;

    const TWO_PRODUCTS: &str = r#"
[[products]]
product_id = "W1"
name = "Merino Scarf"
material = "100% Merino Wool"
color = "Burgundy"
available_sizes = ["One Size"]
price = 39.0
description = "Soft and warm."
care_instructions = "Hand wash cold. Dry flat."

[[products]]
product_id = "W2"
name = "Alpaca Beanie"
material = "80% Alpaca, 20% Nylon"
color = "Oatmeal"
available_sizes = ["S/M", "L/XL"]
price = 29.5
description = "Cozy knit beanie."
care_instructions = "Hand wash only."
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(TWO_PRODUCTS).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("W2").unwrap().available_sizes, vec!["S/M", "L/XL"]);
        assert_eq!(catalog.get("W2").unwrap().price, 29.5);
    }

    #[test]
    fn test_parse_empty_catalog() {
        assert!(parse_catalog("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_field() {
        let toml_str = r#"
[[products]]
product_id = "W1"
name = "Merino Scarf"
"#;
        assert!(matches!(parse_catalog(toml_str), Err(CatalogLoadError::Parse(_))));
    }

    #[test]
    fn test_parse_duplicate_ids() {
        let doubled = TWO_PRODUCTS.replace("\"W2\"", "\"W1\"");
        match parse_catalog(&doubled) {
            Err(CatalogLoadError::Invalid(CatalogError::DuplicateProductId(id))) => {
                assert_eq!(id, "W1")
            }
            other => panic!("Expected duplicate id error, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(CatalogLoadError::Io(_))));
    }
}
