//! # Teller
//!
//! The teller owns the checkout: it holds the catalog, the table of active
//! offers, and the price formatter, and turns a cart into a receipt in one
//! synchronous pass.
//!
//! The offer table is a map keyed by product identity, so "at most one
//! offer per product" holds by construction: registering an offer for a
//! product that already has one silently replaces it.
//!
//! Every distinct product in the cart is evaluated, and each qualifying
//! product gets its own discount line.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::CheckoutResult;
use crate::format::{GroupedFormatter, PriceFormatter};
use crate::offer::Offer;
use crate::product::Product;
use crate::receipt::{Receipt, ReceiptItem};
use std::collections::HashMap;
use tracing::debug;

/// Checkout orchestrator: catalog + active offers + formatter
pub struct Teller<C: Catalog> {
    catalog: C,
    offers: HashMap<Product, Offer>,
    formatter: Box<dyn PriceFormatter>,
}

impl<C: Catalog> Teller<C> {
    /// Create a teller over a catalog, with the default price formatter
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            offers: HashMap::new(),
            formatter: Box::new(GroupedFormatter),
        }
    }

    /// Builder: replace the price formatter used in discount descriptions
    pub fn with_formatter(mut self, formatter: Box<dyn PriceFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Register `offer` for `product`, replacing any prior offer for the
    /// same product (last write wins, no stacking).
    pub fn set_offer(&mut self, product: Product, offer: Offer) {
        if let Some(previous) = self.offers.insert(product, offer) {
            debug!(?previous, ?offer, "replaced existing offer");
        }
    }

    /// Check out a cart: price every entry in scan order, then evaluate
    /// offers over the aggregated per-product quantities.
    ///
    /// Pure with respect to its inputs; checking out the same cart twice
    /// yields equal receipts.
    pub fn checkout(&self, cart: &Cart) -> CheckoutResult<Receipt> {
        let mut receipt = Receipt::new();

        for entry in cart.entries() {
            let unit_price = self.catalog.unit_price(&entry.product)?;
            receipt.add_item(ReceiptItem::new(
                entry.product.clone(),
                entry.quantity,
                unit_price,
            ));
        }

        for (product, quantity) in cart.product_totals() {
            let Some(offer) = self.offers.get(product) else {
                continue;
            };
            let unit_price = self.catalog.unit_price(product)?;
            if let Some(discount) =
                offer.evaluate(product, *quantity, unit_price, self.formatter.as_ref())
            {
                debug!(
                    product = %product.name,
                    description = %discount.description,
                    amount = discount.amount,
                    "applying offer discount"
                );
                receipt.add_discount(discount);
            }
        }

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::error::CheckoutError;
    use crate::product::Product;

    fn toothbrush() -> Product {
        Product::each("toothbrush")
    }

    fn apples() -> Product {
        Product::kilo("apples")
    }

    fn catalog() -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_product(toothbrush(), 5.0);
        catalog.add_product(apples(), 1.99);
        catalog
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_no_offers_no_discounts() {
        let mut cart = Cart::new();
        cart.add_item_quantity(toothbrush(), 2.0);
        cart.add_item_quantity(apples(), 1.5);

        let teller = Teller::new(catalog());
        let receipt = teller.checkout(&cart).unwrap();

        assert!(receipt.discounts().is_empty());
        assert_close(receipt.total_price(), 2.0 * 5.0 + 1.5 * 1.99);
    }

    #[test]
    fn test_offer_on_product_not_in_cart_is_ignored() {
        let mut cart = Cart::new();
        cart.add_item_quantity(apples(), 2.5);

        let mut teller = Teller::new(catalog());
        teller.set_offer(toothbrush(), Offer::percent_off(10.0));

        let receipt = teller.checkout(&cart).unwrap();

        assert!(receipt.discounts().is_empty());
        assert_close(receipt.total_price(), 2.5 * 1.99);
        assert_eq!(receipt.items().len(), 1);
        assert_eq!(receipt.items()[0].unit_price, 1.99);
        assert_eq!(receipt.items()[0].quantity, 2.5);
    }

    #[test]
    fn test_percent_off_applied() {
        let mut cart = Cart::new();
        cart.add_item_quantity(toothbrush(), 1.0);

        let mut teller = Teller::new(catalog());
        teller.set_offer(toothbrush(), Offer::percent_off(10.0));

        let receipt = teller.checkout(&cart).unwrap();

        assert_eq!(receipt.discounts().len(), 1);
        assert_close(receipt.total_price(), 4.5);
    }

    #[test]
    fn test_items_keep_scan_order_across_discounting() {
        let mut cart = Cart::new();
        cart.add_item_quantity(apples(), 1.0);
        cart.add_item_quantity(toothbrush(), 1.0);

        let mut teller = Teller::new(catalog());
        teller.set_offer(toothbrush(), Offer::percent_off(10.0));

        let receipt = teller.checkout(&cart).unwrap();

        assert_close(receipt.total_price(), 1.99 + 4.5);
        assert_eq!(receipt.discounts().len(), 1);
        assert_eq!(receipt.items().len(), 2);
        assert_eq!(receipt.items()[0].product, apples());
        assert_eq!(receipt.items()[1].product, toothbrush());
    }

    #[test]
    fn test_duplicate_entries_stay_separate_lines() {
        let mut cart = Cart::new();
        cart.add_item(toothbrush());
        cart.add_item_quantity(apples(), 0.5);
        cart.add_item_quantity(toothbrush(), 2.0);

        let teller = Teller::new(catalog());
        let receipt = teller.checkout(&cart).unwrap();

        assert_eq!(receipt.items().len(), 3);
        assert_eq!(receipt.items()[0].quantity, 1.0);
        assert_eq!(receipt.items()[2].quantity, 2.0);
        assert_eq!(receipt.items()[0].product, toothbrush());
        assert_eq!(receipt.items()[2].product, toothbrush());
    }

    #[test]
    fn test_two_for_amount_totals() {
        for (quantity, expected_total) in [(2.0, 8.0), (3.0, 13.0), (4.0, 16.0)] {
            let mut cart = Cart::new();
            cart.add_item_quantity(toothbrush(), quantity);

            let mut teller = Teller::new(catalog());
            teller.set_offer(toothbrush(), Offer::two_for(8.0));

            let receipt = teller.checkout(&cart).unwrap();
            assert_eq!(receipt.discounts().len(), 1, "quantity {quantity}");
            assert_close(receipt.total_price(), expected_total);
        }
    }

    #[test]
    fn test_five_for_amount_totals() {
        for (quantity, expected_total) in [(5.0, 20.0), (7.0, 30.0), (10.0, 40.0)] {
            let mut cart = Cart::new();
            cart.add_item_quantity(toothbrush(), quantity);

            let mut teller = Teller::new(catalog());
            teller.set_offer(toothbrush(), Offer::five_for(20.0));

            let receipt = teller.checkout(&cart).unwrap();
            assert_eq!(receipt.discounts().len(), 1, "quantity {quantity}");
            assert_eq!(receipt.discounts()[0].description, "5 for 20.00");
            assert_close(receipt.total_price(), expected_total);
        }
    }

    #[test]
    fn test_three_for_two_totals() {
        for (quantity, expected_total) in [(3.0, 10.0), (4.0, 15.0), (8.0, 30.0), (3.5, 10.0)] {
            let mut cart = Cart::new();
            cart.add_item_quantity(toothbrush(), quantity);

            let mut teller = Teller::new(catalog());
            teller.set_offer(toothbrush(), Offer::three_for_two());

            let receipt = teller.checkout(&cart).unwrap();
            assert_eq!(receipt.discounts().len(), 1, "quantity {quantity}");
            assert_eq!(receipt.discounts()[0].description, "3 for 2");
            assert_close(receipt.total_price(), expected_total);
        }
    }

    #[test]
    fn test_last_registered_offer_wins() {
        let mut cart = Cart::new();
        cart.add_item_quantity(toothbrush(), 3.0);

        // three-for-two registered first, percent off replaces it
        let mut teller = Teller::new(catalog());
        teller.set_offer(toothbrush(), Offer::three_for_two());
        teller.set_offer(toothbrush(), Offer::percent_off(10.0));

        let receipt = teller.checkout(&cart).unwrap();
        assert_eq!(receipt.discounts().len(), 1);
        assert_close(receipt.total_price(), 13.5);

        // and in the opposite order
        let mut teller = Teller::new(catalog());
        teller.set_offer(toothbrush(), Offer::percent_off(10.0));
        teller.set_offer(toothbrush(), Offer::three_for_two());

        let receipt = teller.checkout(&cart).unwrap();
        assert_eq!(receipt.discounts().len(), 1);
        assert_close(receipt.total_price(), 10.0);
    }

    #[test]
    fn test_two_products_each_get_their_own_discount() {
        let mut cart = Cart::new();
        cart.add_item_quantity(toothbrush(), 3.0);
        cart.add_item_quantity(apples(), 2.0);

        let mut teller = Teller::new(catalog());
        teller.set_offer(toothbrush(), Offer::three_for_two());
        teller.set_offer(apples(), Offer::percent_off(10.0));

        let receipt = teller.checkout(&cart).unwrap();

        // Discount lines follow the cart's first-seen product order
        assert_eq!(receipt.discounts().len(), 2);
        assert_eq!(receipt.discounts()[0].product, toothbrush());
        assert_eq!(receipt.discounts()[1].product, apples());
        assert_close(
            receipt.total_price(),
            10.0 + 2.0 * 1.99 * 0.9,
        );
    }

    #[test]
    fn test_checkout_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item_quantity(toothbrush(), 3.0);
        cart.add_item_quantity(apples(), 2.5);

        let mut teller = Teller::new(catalog());
        teller.set_offer(toothbrush(), Offer::three_for_two());
        teller.set_offer(apples(), Offer::percent_off(10.0));

        let first = teller.checkout(&cart).unwrap();
        let second = teller.checkout(&cart).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_catalog_price_fails_fast() {
        let mut cart = Cart::new();
        cart.add_item(Product::each("unstocked"));

        let teller = Teller::new(catalog());
        let err = teller.checkout(&cart).unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::PriceNotFound { product } if product == "unstocked"
        ));
    }

    #[test]
    fn test_empty_cart_checks_out_to_empty_receipt() {
        let teller = Teller::new(catalog());
        let receipt = teller.checkout(&Cart::new()).unwrap();

        assert!(receipt.items().is_empty());
        assert!(receipt.discounts().is_empty());
        assert_eq!(receipt.total_price(), 0.0);
    }
}
