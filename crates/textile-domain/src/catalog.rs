//! Catalog module - the read-only product collection
//!
//! The catalog is built once at process start and never mutated afterwards.
//! Construction enforces the catalog invariants:
//!
//! - `product_id` is unique within the catalog
//! - every price is finite and non-negative

use crate::product::Product;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building a catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Two products share the same identifier
    #[error("Duplicate product id '{0}' in catalog")]
    DuplicateProductId(String),

    /// A product has a negative or non-finite price
    #[error("Invalid price {price} for product '{product_id}'")]
    InvalidPrice {
        /// Offending product
        product_id: String,
        /// Offending price
        price: f64,
    },
}

/// Immutable collection of products
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and prices
    ///
    /// Product order is preserved.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.product_id.as_str()) {
                return Err(CatalogError::DuplicateProductId(
                    product.product_id.clone(),
                ));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    product_id: product.product_id.clone(),
                    price: product.price,
                });
            }
        }
        Ok(Self { products })
    }

    /// The built-in textile catalog
    ///
    /// # Examples
    ///
    /// ```
    /// use textile_domain::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.len(), 4);
    /// assert_eq!(catalog.get("T103").unwrap().color, "Forest Green");
    /// ```
    pub fn builtin() -> Self {
        let products = vec![
            product(
                "T101",
                "Organic Cotton T-Shirt",
                "100% Organic Cotton",
                "Natural Beige",
                &["S", "M", "L", "XL"],
                25.00,
                "A classic, soft t-shirt made from eco-friendly organic cotton. Breathable and comfortable for everyday wear.",
                "Machine wash cold, tumble dry low.",
            ),
            product(
                "T102",
                "Bamboo Blend Lounge Pants",
                "70% Bamboo Viscose, 30% Spandex",
                "Charcoal Gray",
                &["S", "M", "L"],
                45.00,
                "Luxuriously soft and stretchy lounge pants, perfect for relaxing at home. The bamboo viscose provides a silky feel.",
                "Hand wash or machine wash on a delicate cycle. Do not bleach.",
            ),
            product(
                "T103",
                "Recycled Polyester Fleece Jacket",
                "100% Recycled Polyester",
                "Forest Green",
                &["M", "L", "XL", "XXL"],
                75.00,
                "A warm and durable fleece jacket made entirely from recycled plastic bottles. Features a full-zip front and two side pockets.",
                "Machine wash warm. Hang to dry.",
            ),
            product(
                "T104",
                "Linen Button-Up Shirt",
                "100% Linen",
                "Sky Blue",
                &["S", "M", "XL"],
                60.00,
                "A lightweight and breathable linen shirt, ideal for warm weather. It has a relaxed fit and a classic collar.",
                "Machine wash cold. Iron on a low setting.",
            ),
        ];

        Self { products }
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Look up a product by id
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    product_id: &str,
    name: &str,
    material: &str,
    color: &str,
    sizes: &[&str],
    price: f64,
    description: &str,
    care_instructions: &str,
) -> Product {
    Product {
        product_id: product_id.to_string(),
        name: name.to_string(),
        material: material.to_string(),
        color: color.to_string(),
        available_sizes: sizes.iter().map(|s| s.to_string()).collect(),
        price,
        description: description.to_string(),
        care_instructions: care_instructions.to_string(),
    }
}
