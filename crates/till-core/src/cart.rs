//! # Shopping Cart
//!
//! The cart accumulates `(product, quantity)` entries in the order they are
//! scanned. Entries for the same product are never merged in the visible
//! list; a per-product running total, kept in first-seen order, exists only
//! so offers can be evaluated against the whole quantity purchased.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// One scanned line: a product and the quantity scanned in that line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// The product scanned
    pub product: Product,

    /// Quantity for this entry (whole units or kilograms)
    pub quantity: f64,
}

/// A cart under accumulation. Pure data, raises no errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
    totals: Vec<(Product, f64)>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single unit of `product`
    pub fn add_item(&mut self, product: Product) {
        self.add_item_quantity(product, 1.0);
    }

    /// Add `quantity` of `product` as a new entry.
    ///
    /// `quantity` must be finite and non-negative; fractional quantities
    /// are accepted for any product unit kind.
    pub fn add_item_quantity(&mut self, product: Product, quantity: f64) {
        match self.totals.iter_mut().find(|(p, _)| *p == product) {
            Some((_, total)) => *total += quantity,
            None => self.totals.push((product.clone(), quantity)),
        }
        self.entries.push(CartEntry { product, quantity });
    }

    /// Scanned entries in insertion order
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Aggregated quantity per distinct product, in first-seen order.
    /// Used only for offer evaluation, never for the visible item list.
    pub fn product_totals(&self) -> &[(Product, f64)] {
        &self.totals
    }

    /// True if nothing has been scanned
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of scanned entries (not units)
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
