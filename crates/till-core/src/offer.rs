//! # Special Offers
//!
//! The offer kinds a product can carry and the discount arithmetic for
//! each. This is the heart of the engine: given a product's aggregated
//! cart quantity and unit price, [`Offer::evaluate`] decides whether the
//! offer triggers and what the (negative) price adjustment is.
//!
//! Bundle arithmetic works on `n = floor(quantity)`. `BundleForAmount`
//! also prices the undiscounted remainder from `n`, so any fractional
//! excess is silently dropped from the discounted total; `PercentOff` and
//! `BundleOneFree` carry the exact `quantity * unit_price` term instead.
//! This asymmetry is long-standing billing behavior, kept as-is.

use crate::format::PriceFormatter;
use crate::product::Product;
use crate::receipt::Discount;
use serde::{Deserialize, Serialize};

/// A special offer on a single product. At most one offer is active per
/// product at any time; see `Teller::set_offer`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Offer {
    /// Percentage off the full purchased quantity, e.g. "10% off"
    PercentOff { percent: f64 },

    /// `size` units sold together for a fixed `amount`, e.g. "2 for 8.00"
    BundleForAmount { size: u32, amount: f64 },

    /// A bundle of `size` units billed as `size - 1` at unit price,
    /// the classic "3 for 2"
    BundleOneFree { size: u32 },
}

impl Offer {
    /// Percentage discount on the whole quantity
    pub fn percent_off(percent: f64) -> Self {
        Offer::PercentOff { percent }
    }

    /// Two units for a fixed amount
    pub fn two_for(amount: f64) -> Self {
        Offer::BundleForAmount { size: 2, amount }
    }

    /// Five units for a fixed amount
    pub fn five_for(amount: f64) -> Self {
        Offer::BundleForAmount { size: 5, amount }
    }

    /// Three units for the price of two
    pub fn three_for_two() -> Self {
        Offer::BundleOneFree { size: 3 }
    }

    /// Evaluate this offer against a product's aggregated quantity.
    ///
    /// Returns the discount line when the trigger threshold is met,
    /// `None` otherwise. `quantity` must be non-negative and finite;
    /// `unit_price` positive.
    pub fn evaluate(
        &self,
        product: &Product,
        quantity: f64,
        unit_price: f64,
        formatter: &dyn PriceFormatter,
    ) -> Option<Discount> {
        // Whole units available for bundle arithmetic
        let n = quantity as u64;

        match *self {
            Offer::PercentOff { percent } => {
                if quantity <= 0.0 {
                    return None;
                }
                Some(Discount::new(
                    product.clone(),
                    format!("{percent}% off"),
                    -(quantity * unit_price * percent / 100.0),
                ))
            }

            Offer::BundleForAmount { size, amount } => {
                let size = u64::from(size);
                if size == 0 || n < size {
                    return None;
                }
                // Full-price remainder comes from n, not quantity
                let discounted_total =
                    amount * (n / size) as f64 + (n % size) as f64 * unit_price;
                Some(Discount::new(
                    product.clone(),
                    format!("{size} for {}", formatter.format_price(amount)),
                    -(unit_price * quantity - discounted_total),
                ))
            }

            Offer::BundleOneFree { size } => {
                let size = u64::from(size);
                if size < 2 || n < size {
                    return None;
                }
                let billed_units = (n / size) * (size - 1) + n % size;
                Some(Discount::new(
                    product.clone(),
                    format!("{} for {}", size, size - 1),
                    -(quantity * unit_price - billed_units as f64 * unit_price),
                ))
            }
        }
    }
}
