use serde::{Deserialize, Serialize};

/// Identifier of a product in the catalog and in the cart.
pub type ProductId = u64;

/// Canonical product fields as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl CatalogProduct {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// A cart line item: the catalog fields plus the quantity in the cart.
///
/// Field order matches the persisted layout `{id, name, price, image, amount}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub amount: u32,
}

impl Product {
    /// Builds a fresh cart entry with `amount = 1`.
    pub fn from_catalog(product: CatalogProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

/// Request payload for changing the quantity of a cart entry.
///
/// `amount` is signed so non-positive requests can be expressed and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_product_without_image_defaults_to_empty() {
        let product: CatalogProduct =
            serde_json::from_str(r#"{"id":42,"name":"Shoe","price":10}"#).unwrap();
        assert_eq!(product, CatalogProduct::new(42, "Shoe", 10.0, ""));
    }

    #[test]
    fn from_catalog_starts_at_one() {
        let entry = Product::from_catalog(CatalogProduct::new(7, "Sock", 2.5, "sock.png"));
        assert_eq!(entry.amount, 1);
        assert_eq!(entry.image, "sock.png");
        assert_eq!(entry.subtotal(), 2.5);
    }
}
