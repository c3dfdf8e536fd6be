//! # Checkout Error Types
//!
//! Typed error handling for the till pricing engine.
//! All fallible checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The catalog has no unit price for a product referenced by the cart.
    /// This is a caller precondition violation and is never papered over
    /// with a zero price.
    #[error("No unit price in catalog for product: {product}")]
    PriceNotFound { product: String },

    /// Catalog configuration could not be parsed
    #[error("Catalog config error: {0}")]
    CatalogConfig(#[from] toml::de::Error),
}

impl CheckoutError {
    /// Shorthand for a missing-price error
    pub fn price_not_found(product: impl Into<String>) -> Self {
        CheckoutError::PriceNotFound {
            product: product.into(),
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
