//! # till-core
//!
//! Core pricing and receipt engine for the till checkout system.
//!
//! This crate provides:
//! - `Product` and `ProductUnit` for the goods being sold
//! - `Catalog` trait and `InMemoryCatalog` for unit-price lookup
//! - `Cart` and `CartEntry` for accumulating scanned items
//! - `Offer` for per-product special offers and their discount arithmetic
//! - `Teller` for running a checkout and producing a `Receipt`
//! - `CheckoutError` for typed error handling
//!
//! A product carries at most one active offer; registering a second offer
//! for the same product replaces the first. Checkout is synchronous and
//! pure: the receipt is a function of the cart, the catalog, and the
//! offers at call time.
//!
//! ## Example
//!
//! ```rust
//! use till_core::{Cart, InMemoryCatalog, Offer, Product, Teller};
//!
//! let mut catalog = InMemoryCatalog::new();
//! catalog.add_product(Product::each("toothbrush"), 5.0);
//!
//! let mut teller = Teller::new(catalog);
//! teller.set_offer(Product::each("toothbrush"), Offer::three_for_two());
//!
//! let mut cart = Cart::new();
//! cart.add_item_quantity(Product::each("toothbrush"), 3.0);
//!
//! let receipt = teller.checkout(&cart)?;
//! assert_eq!(receipt.total_price(), 10.0);
//! # Ok::<(), till_core::CheckoutError>(())
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod format;
pub mod offer;
pub mod product;
pub mod receipt;
pub mod teller;

// Re-exports for convenience
pub use cart::{Cart, CartEntry};
pub use catalog::{Catalog, InMemoryCatalog};
pub use error::{CheckoutError, CheckoutResult};
pub use format::{GroupedFormatter, PriceFormatter};
pub use offer::Offer;
pub use product::{Product, ProductUnit};
pub use receipt::{Discount, Receipt, ReceiptItem};
pub use teller::Teller;
