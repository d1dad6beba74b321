use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

use super::macros::client_method;
use crate::cart_actor::{CartError, CartRequest};
use crate::domain::{Cart, ProductId, UpdateProductAmount};

/// Handle to the cart actor. Cheap to clone; every clone talks to the same
/// cart.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    snapshot: watch::Receiver<Cart>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, snapshot: watch::Receiver<Cart>) -> Self {
        Self { sender, snapshot }
    }

    /// The most recently committed cart, without a round trip to the actor.
    pub fn cart(&self) -> Cart {
        self.snapshot.borrow().clone()
    }

    /// A receiver that is marked changed on every committed cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.snapshot.clone()
    }

    /// Asks the actor to stop once the requests queued before this one are handled.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(
    /// Adds one unit of `product_id`, fetching it from the catalog on first add.
    CartClient => fn add_product(product_id: ProductId) -> Cart
        as CartRequest::AddProduct, Error = CartError
);
client_method!(
    CartClient => fn remove_product(product_id: ProductId) -> Cart
        as CartRequest::RemoveProduct, Error = CartError
);
client_method!(
    /// Sets the amount of an entry. Amounts below 1 are rejected.
    CartClient => fn update_product_amount(update: UpdateProductAmount) -> Cart
        as CartRequest::UpdateProductAmount, Error = CartError
);
client_method!(
    /// The cart after every request queued before this one.
    CartClient => fn get_cart() -> Cart as CartRequest::GetCart, Error = CartError
);
