use thiserror::Error;

use crate::domain::ProductId;

/// Errors that can occur while looking up a product.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found in catalog: {0}")]
    NotFound(ProductId),
    #[error("Catalog request failed: {0}")]
    Http(String),
    #[error("Invalid catalog response: {0}")]
    InvalidResponse(String),
}
