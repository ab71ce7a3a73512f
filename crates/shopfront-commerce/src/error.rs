//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Delivery option not found.
    #[error("Delivery option not found: {0}")]
    DeliveryOptionNotFound(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg(feature = "storage")]
impl From<shopfront_cache::CacheError> for CommerceError {
    fn from(e: shopfront_cache::CacheError) -> Self {
        CommerceError::StorageError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
