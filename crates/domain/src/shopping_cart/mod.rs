//! Shopping cart aggregate and related types.

mod aggregate;
mod events;
mod product_items;
mod status;
mod value_objects;

pub use aggregate::ShoppingCart;
pub use events::{
    ProductItemAddedData, ProductItemRemovedData, ShoppingCartConfirmedData, ShoppingCartEvent,
    ShoppingCartInitializedData,
};
pub use product_items::ProductItems;
pub use status::ShoppingCartStatus;
pub use value_objects::{Money, PricedProductItem, ProductItem};

use common::AggregateId;
use thiserror::Error;

/// Errors that can occur when applying an event to a shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShoppingCartError {
    /// An event other than ShoppingCartInitialized arrived before the cart existed.
    #[error("Shopping cart not initialized: cannot apply {event_type} before ShoppingCartInitialized")]
    NotInitialized { event_type: &'static str },

    /// ShoppingCartInitialized arrived for a cart that already exists.
    #[error("Shopping cart {cart_id} is already initialized")]
    AlreadyInitialized { cart_id: AggregateId },

    /// The event belongs to a different cart than the one being rebuilt.
    #[error("Event for cart {actual} cannot be applied to cart {expected}")]
    CartMismatch {
        expected: AggregateId,
        actual: AggregateId,
    },
}
