use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};

use super::error::CartError;
use super::messages::{CartRequest, ServiceResponse};
use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::domain::{Cart, ProductId, UpdateProductAmount};
use crate::notify::{Notification, Notifier};
use crate::storage::KeyValueStore;

pub const PRODUCT_ADDED: &str = "Product added to cart";
pub const PRODUCT_REMOVED: &str = "Product removed";

/// External collaborators of the cart actor.
#[derive(Clone)]
pub struct CartBackends {
    pub catalog: Arc<dyn Catalog>,
    pub store: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn Notifier>,
}

/// Owns the cart and serializes every mutation.
///
/// Messages are handled one at a time, including the catalog round trip of
/// `AddProduct`, so each operation computes its new cart from the latest
/// committed one. A new cart is persisted before it replaces the in-memory
/// one; a failed write leaves both untouched.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    storage_key: String,
    backends: CartBackends,
    snapshot: watch::Sender<Cart>,
}

impl CartService {
    /// Loads the persisted cart under `storage_key` and returns the actor
    /// together with its client.
    pub fn new(
        buffer_size: usize,
        storage_key: impl Into<String>,
        backends: CartBackends,
    ) -> (Self, CartClient) {
        let storage_key = storage_key.into();
        let cart = load_cart(backends.store.as_ref(), &storage_key);

        let (sender, receiver) = mpsc::channel(buffer_size);
        let (snapshot, snapshot_receiver) = watch::channel(cart.clone());
        let service = Self {
            receiver,
            cart,
            storage_key,
            backends,
            snapshot,
        };
        let client = CartClient::new(sender, snapshot_receiver);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self), fields(storage_key = %self.storage_key))]
    pub async fn run(mut self) {
        info!(entries = self.cart.len(), "CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddProduct {
                    product_id,
                    respond_to,
                } => {
                    self.handle_add_product(product_id, respond_to).await;
                }
                CartRequest::RemoveProduct {
                    product_id,
                    respond_to,
                } => {
                    self.handle_remove_product(product_id, respond_to);
                }
                CartRequest::UpdateProductAmount { update, respond_to } => {
                    self.handle_update_product_amount(update, respond_to);
                }
                CartRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.clone()));
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_add_product(
        &mut self,
        product_id: ProductId,
        respond_to: ServiceResponse<Cart, CartError>,
    ) {
        debug!("Processing add_product request");
        let result = self.add_product(product_id).await;
        self.reply(result, respond_to);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_remove_product(
        &mut self,
        product_id: ProductId,
        respond_to: ServiceResponse<Cart, CartError>,
    ) {
        debug!("Processing remove_product request");
        let result = self.remove_product(product_id);
        self.reply(result, respond_to);
    }

    #[instrument(
        fields(product_id = update.product_id, amount = update.amount),
        skip(self, update, respond_to)
    )]
    fn handle_update_product_amount(
        &mut self,
        update: UpdateProductAmount,
        respond_to: ServiceResponse<Cart, CartError>,
    ) {
        debug!("Processing update_product_amount request");
        let result = self.update_product_amount(update);
        self.reply(result, respond_to);
    }

    /// Every failure becomes an error notification before the caller sees it.
    fn reply(&self, result: Result<Cart, CartError>, respond_to: ServiceResponse<Cart, CartError>) {
        if let Err(e) = &result {
            self.backends.notifier.notify(Notification::error(e.to_string()));
        }
        let _ = respond_to.send(result);
    }

    async fn add_product(&mut self, product_id: ProductId) -> Result<Cart, CartError> {
        if let Some(existing) = self.cart.get(product_id) {
            let amount = i64::from(existing.amount) + 1;
            debug!(amount, "Product already in cart");
            return self.update_product_amount(UpdateProductAmount::new(product_id, amount));
        }

        let product = match self.backends.catalog.product(product_id).await {
            Ok(product) => product,
            Err(e) => {
                error!(error = %e, "Catalog lookup failed");
                return Err(CartError::CatalogLookupFailed {
                    product_id,
                    reason: e.to_string(),
                });
            }
        };

        info!(product_name = %product.name, price = %product.price, "Product fetched from catalog");
        self.commit(self.cart.with_product(product))?;
        self.backends
            .notifier
            .notify(Notification::success(PRODUCT_ADDED));
        Ok(self.cart.clone())
    }

    fn remove_product(&mut self, product_id: ProductId) -> Result<Cart, CartError> {
        let cart = self.cart.without_product(product_id).map_err(|e| {
            error!("Product not in cart");
            e
        })?;

        self.commit(cart)?;
        info!("Product removed from cart");
        self.backends
            .notifier
            .notify(Notification::info(PRODUCT_REMOVED));
        Ok(self.cart.clone())
    }

    fn update_product_amount(&mut self, update: UpdateProductAmount) -> Result<Cart, CartError> {
        let cart = self.cart.with_amount(update).map_err(|e| {
            error!(error = %e, "Amount rejected");
            e
        })?;

        if !self.cart.contains(update.product_id) {
            debug!("No cart entry for product, nothing to update");
            return Ok(self.cart.clone());
        }

        self.commit(cart)?;
        info!(amount = update.amount, "Product amount updated");
        Ok(self.cart.clone())
    }

    /// Writes `cart` through to storage, then makes it the current cart.
    fn commit(&mut self, cart: Cart) -> Result<(), CartError> {
        let json = cart
            .to_json()
            .map_err(|e| CartError::Storage(e.to_string()))?;

        if let Err(e) = self.backends.store.set(&self.storage_key, &json) {
            error!(error = %e, "Failed to persist cart");
            return Err(CartError::Storage(e.to_string()));
        }

        self.cart = cart;
        self.snapshot.send_replace(self.cart.clone());
        Ok(())
    }
}

/// Reads the saved cart. A missing key yields an empty cart; an unreadable
/// or corrupt blob is logged and also yields an empty cart, which the next
/// successful mutation overwrites.
fn load_cart(store: &dyn KeyValueStore, key: &str) -> Cart {
    match store.get(key) {
        Ok(Some(json)) => match Cart::from_json(&json) {
            Ok(cart) => {
                debug!(entries = cart.len(), "Loaded persisted cart");
                cart
            }
            Err(e) => {
                warn!(error = %e, "Persisted cart is corrupt, starting empty");
                Cart::new()
            }
        },
        Ok(None) => Cart::new(),
        Err(e) => {
            warn!(error = %e, "Failed to read persisted cart, starting empty");
            Cart::new()
        }
    }
}
