//! # Product Catalog
//!
//! The catalog supplies the current unit price for a product. The till
//! engine only ever asks for prices; catalog maintenance (stocking,
//! repricing) is the owner's concern. A simple in-memory catalog is
//! provided, loadable from a `[[products]]` TOML document.

use crate::error::{CheckoutError, CheckoutResult};
use crate::product::{Product, ProductUnit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Source of unit prices at checkout time.
///
/// A missing price is a precondition violation and surfaces as
/// [`CheckoutError::PriceNotFound`]; implementations must not default to
/// a zero price.
pub trait Catalog {
    /// Current unit price for `product`
    fn unit_price(&self, product: &Product) -> CheckoutResult<f64>;
}

/// In-memory catalog backed by a product list and a price map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    prices: HashMap<String, f64>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product with its unit price. Re-adding a product updates
    /// its price.
    pub fn add_product(&mut self, product: Product, unit_price: f64) {
        if !self.products.contains(&product) {
            self.products.push(product.clone());
        }
        self.prices.insert(product.name, unit_price);
    }

    /// Find a product by name
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// All products in the catalog
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Load a catalog from a TOML document:
    ///
    /// ```toml
    /// [[products]]
    /// name = "toothbrush"
    /// unit = "each"
    /// price = 5.00
    /// ```
    pub fn from_toml(toml_str: &str) -> CheckoutResult<Self> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        let mut catalog = Self::new();
        for entry in file.products {
            catalog.add_product(Product::new(entry.name, entry.unit), entry.price);
        }
        Ok(catalog)
    }
}

impl Catalog for InMemoryCatalog {
    fn unit_price(&self, product: &Product) -> CheckoutResult<f64> {
        self.prices
            .get(&product.name)
            .copied()
            .ok_or_else(|| CheckoutError::price_not_found(&product.name))
    }
}

/// On-disk catalog document shape
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    unit: ProductUnit,
    price: f64,
}
