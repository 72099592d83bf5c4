//! Product error types.

use cagnotte_shared::Currency;
use thiserror::Error;

/// Product-related errors.
#[derive(Debug, Error)]
pub enum ProductError {
    /// Product category outside the recognized set.
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// Recognized currency with no price entry on this product.
    #[error("Currency not available for this product: {0}")]
    CurrencyNotAvailable(Currency),
}
