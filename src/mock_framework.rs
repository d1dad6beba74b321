//! # Mock Framework
//!
//! Utilities for testing code that drives a [`CartClient`] without spinning up
//! a [`CartService`](crate::cart_actor::CartService).
//!
//! [`create_mock_client`] hands out a client whose requests land on a receiver
//! the test owns. Helpers like [`expect_add`] pull the next request, assert
//! its kind, and return the responder so the test decides the outcome.

use tokio::sync::{mpsc, watch};

use crate::cart_actor::{CartError, CartRequest, ServiceResponse};
use crate::clients::CartClient;
use crate::domain::{Cart, ProductId, UpdateProductAmount};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client's snapshot stays at an empty cart.
pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_snapshot, snapshot_receiver) = watch::channel(Cart::new());
    (CartClient::new(sender, snapshot_receiver), receiver)
}

/// Next message must be an AddProduct request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(ProductId, ServiceResponse<Cart, CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::AddProduct {
            product_id,
            respond_to,
        }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Next message must be a RemoveProduct request
pub async fn expect_remove(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(ProductId, ServiceResponse<Cart, CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::RemoveProduct {
            product_id,
            respond_to,
        }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Next message must be an UpdateProductAmount request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(UpdateProductAmount, ServiceResponse<Cart, CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::UpdateProductAmount { update, respond_to }) => Some((update, respond_to)),
        _ => None,
    }
}

/// Next message must be a GetCart request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<ServiceResponse<Cart, CartError>> {
    match receiver.recv().await {
        Some(CartRequest::GetCart { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_product(42).await });

        let (product_id, responder) = expect_add(&mut receiver).await.expect("Expected AddProduct request");
        assert_eq!(product_id, 42);
        responder.send(Err(CartError::NotFound(42))).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Err(CartError::NotFound(42)));
    }

    #[tokio::test]
    async fn dropped_responder_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.get_cart().await });
        drop(expect_get(&mut receiver).await.expect("Expected GetCart request"));

        assert_eq!(
            task.await.unwrap(),
            Err(CartError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }
}
