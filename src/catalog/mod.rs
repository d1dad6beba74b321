//! Catalog access: fetches a product's canonical fields by id.
//!
//! Backends:
//! - [`HttpCatalog`]: the remote product API (`GET /products/{id}`)
//! - [`StaticCatalog`]: a fixed in-memory product list (demo and tests)

mod error;
mod http;
mod memory;

pub use error::*;
pub use http::*;
pub use memory::*;

use async_trait::async_trait;

use crate::domain::{CatalogProduct, ProductId};

/// Read-only source of canonical product records.
///
/// No retry and no caching: every call is one lookup.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch the product with the given id, failing if it is unknown.
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError>;
}
