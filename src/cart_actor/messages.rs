use tokio::sync::oneshot;

use super::error::CartError;
use crate::domain::{Cart, ProductId, UpdateProductAmount};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by [`CartService`](super::CartService). Each mutating
/// variant answers with the cart as committed after the operation.
#[derive(Debug)]
pub enum CartRequest {
    AddProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    UpdateProductAmount {
        update: UpdateProductAmount,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    GetCart {
        respond_to: ServiceResponse<Cart, CartError>,
    },
    Shutdown,
}
