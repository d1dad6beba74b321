use thiserror::Error;

use crate::domain::ProductId;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Minimum quantity reached: requested {0}")]
    InvalidQuantity(i64),
    #[error("Catalog lookup failed for product {product_id}: {reason}")]
    CatalogLookupFailed { product_id: ProductId, reason: String },
    #[error("Cart storage error: {0}")]
    Storage(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
