//! Error types for the storefront.

use crate::model::{OrderId, OrderStatus, ProductId, UserId};
use hal_framework::HalError;
use thiserror::Error;

/// Errors that can occur while placing orders or building documents.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("Order {order_id} is {status:?} and can no longer change")]
    OrderClosed {
        order_id: OrderId,
        status: OrderStatus,
    },

    #[error("Order has no lines")]
    EmptyOrder,

    #[error("Render error: {0}")]
    Render(#[from] HalError),
}
