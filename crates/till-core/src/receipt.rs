//! # Receipt Types
//!
//! The immutable output of a checkout: priced line items in scan order,
//! discount lines, and the derived total. Nothing here decides anything;
//! assembly and summation only.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// One priced line on the receipt, mirroring one cart entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    /// The product billed
    pub product: Product,

    /// Quantity from the cart entry
    pub quantity: f64,

    /// Unit price at checkout time
    pub unit_price: f64,

    /// Extended price: `unit_price * quantity`
    pub total_price: f64,
}

impl ReceiptItem {
    /// Price a cart entry at the given unit price
    pub fn new(product: Product, quantity: f64, unit_price: f64) -> Self {
        Self {
            product,
            quantity,
            unit_price,
            total_price: unit_price * quantity,
        }
    }
}

/// A discount line: a non-positive adjustment to the receipt total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// The discounted product
    pub product: Product,

    /// Human-readable offer description, e.g. "3 for 2"
    pub description: String,

    /// Adjustment amount, always `<= 0`
    pub amount: f64,
}

impl Discount {
    /// Create a discount line
    pub fn new(product: Product, description: impl Into<String>, amount: f64) -> Self {
        Self {
            product,
            description: description.into(),
            amount,
        }
    }
}

/// An itemized receipt. Immutable once checkout returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    items: Vec<ReceiptItem>,
    discounts: Vec<Discount>,
}

impl Receipt {
    /// Create an empty receipt
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a priced line item
    pub fn add_item(&mut self, item: ReceiptItem) {
        self.items.push(item);
    }

    /// Append a discount line
    pub fn add_discount(&mut self, discount: Discount) {
        self.discounts.push(discount);
    }

    /// Line items in the order the cart was scanned
    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    /// Discount lines in the order they were applied
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Receipt total: extended prices plus (non-positive) discounts
    pub fn total_price(&self) -> f64 {
        let items: f64 = self.items.iter().map(|i| i.total_price).sum();
        let discounts: f64 = self.discounts.iter().map(|d| d.amount).sum();
        items + discounts
    }
}
