//! # Product Types
//!
//! Products as sold at the till: a name plus how the product is measured.
//! Identity is the name; two `Product` values with the same name are the
//! same product wherever they appear (cart entries, offers, catalog).

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// How a product's quantity is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductUnit {
    /// Sold in whole units (a toothbrush, a can)
    Each,
    /// Sold by weight in kilograms (loose apples)
    Kilo,
}

impl ProductUnit {
    /// True for products sold in whole units
    pub fn is_discrete(&self) -> bool {
        matches!(self, ProductUnit::Each)
    }
}

/// A product as referenced by the cart, the catalog, and offers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product name; doubles as the product's identity
    pub name: String,

    /// Unit classification (descriptive only, never used for equality)
    pub unit: ProductUnit,
}

impl Product {
    /// Create a new product
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Self {
            name: name.into(),
            unit,
        }
    }

    /// Shorthand for a product sold in whole units
    pub fn each(name: impl Into<String>) -> Self {
        Self::new(name, ProductUnit::Each)
    }

    /// Shorthand for a product sold by weight
    pub fn kilo(name: impl Into<String>) -> Self {
        Self::new(name, ProductUnit::Kilo)
    }
}

// Equality and hashing go through the name only, so clones of a product
// compare equal and collide in maps keyed by product.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
