//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Cart has no items to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// Unknown revenue statistics mode.
    #[error("Unknown revenue mode: {0} (expected hour, day or month)")]
    UnknownRevenueMode(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),
}

impl From<shop_cache::CacheError> for CommerceError {
    fn from(e: shop_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}
