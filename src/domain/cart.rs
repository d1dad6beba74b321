use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::product::{CatalogProduct, Product, ProductId, UpdateProductAmount};
use crate::cart_actor::CartError;

/// Reasons a list of entries cannot form a cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidCartError {
    #[error("Duplicate cart entry for product {0}")]
    DuplicateProduct(ProductId),
    #[error("Cart entry for product {0} has zero amount")]
    ZeroAmount(ProductId),
}

/// The ordered list of cart entries.
///
/// Every operation returns a new `Cart` and leaves `self` untouched, so the
/// caller can persist the result before committing it.
///
/// Invariants: at most one entry per product id, every amount is at least 1,
/// insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all amounts.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|product| u64::from(product.amount)).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::subtotal).sum()
    }

    /// Appends a catalog product with `amount = 1`.
    ///
    /// An id that is already present leaves the cart as it is; incrementing an
    /// existing entry goes through [`Cart::with_amount`].
    pub fn with_product(&self, product: CatalogProduct) -> Cart {
        if self.contains(product.id) {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.push(Product::from_catalog(product));
        Cart { items }
    }

    /// Drops the entry for `id`, keeping the relative order of the rest.
    pub fn without_product(&self, id: ProductId) -> Result<Cart, CartError> {
        if !self.contains(id) {
            return Err(CartError::NotFound(id));
        }
        let items = self
            .items
            .iter()
            .filter(|product| product.id != id)
            .cloned()
            .collect();
        Ok(Cart { items })
    }

    /// Replaces the amount of the matching entry in place.
    ///
    /// Non-positive amounts are rejected. An id with no entry yields an
    /// identical cart.
    pub fn with_amount(&self, update: UpdateProductAmount) -> Result<Cart, CartError> {
        if update.amount <= 0 {
            return Err(CartError::InvalidQuantity(update.amount));
        }
        let amount =
            u32::try_from(update.amount).map_err(|_| CartError::InvalidQuantity(update.amount))?;

        let items = self
            .items
            .iter()
            .map(|product| {
                if product.id == update.product_id {
                    Product {
                        amount,
                        ..product.clone()
                    }
                } else {
                    product.clone()
                }
            })
            .collect();
        Ok(Cart { items })
    }

    /// Serializes to the persisted layout: a JSON array in cart order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Cart> {
        serde_json::from_str(json)
    }
}

impl TryFrom<Vec<Product>> for Cart {
    type Error = InvalidCartError;

    fn try_from(items: Vec<Product>) -> Result<Self, Self::Error> {
        for (index, product) in items.iter().enumerate() {
            if product.amount == 0 {
                return Err(InvalidCartError::ZeroAmount(product.id));
            }
            if items[..index].iter().any(|earlier| earlier.id == product.id) {
                return Err(InvalidCartError::DuplicateProduct(product.id));
            }
        }
        Ok(Cart { items })
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
