use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use super::{Catalog, CatalogError};
use crate::domain::{CatalogProduct, ProductId};

/// Catalog backed by a fixed product list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: HashMap<ProductId, CatalogProduct>,
}

impl StaticCatalog {
    pub fn new(products: impl IntoIterator<Item = CatalogProduct>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.id, product))
                .collect(),
        }
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        debug!(product_id = id, "Looking up product in static catalog");
        self.products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}
