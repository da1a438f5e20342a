//! Shopping cart domain events.

use chrono::{DateTime, Utc};
use common::{AggregateId, ClientId};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::{PricedProductItem, ShoppingCartStatus};

/// Events that can occur on a shopping cart aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShoppingCartEvent {
    /// Cart was opened for a client. Always the first event of a cart.
    ShoppingCartInitialized(ShoppingCartInitializedData),

    /// A priced product item was put into the cart.
    ProductItemAdded(ProductItemAddedData),

    /// A priced product item was taken out of the cart.
    ProductItemRemoved(ProductItemRemovedData),

    /// Cart was confirmed.
    ShoppingCartConfirmed(ShoppingCartConfirmedData),
}

impl DomainEvent for ShoppingCartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ShoppingCartEvent::ShoppingCartInitialized(_) => "ShoppingCartInitialized",
            ShoppingCartEvent::ProductItemAdded(_) => "ProductItemAdded",
            ShoppingCartEvent::ProductItemRemoved(_) => "ProductItemRemoved",
            ShoppingCartEvent::ShoppingCartConfirmed(_) => "ShoppingCartConfirmed",
        }
    }

    fn aggregate_id(&self) -> AggregateId {
        match self {
            ShoppingCartEvent::ShoppingCartInitialized(data) => data.cart_id,
            ShoppingCartEvent::ProductItemAdded(data) => data.cart_id,
            ShoppingCartEvent::ProductItemRemoved(data) => data.cart_id,
            ShoppingCartEvent::ShoppingCartConfirmed(data) => data.cart_id,
        }
    }
}

/// Data for ShoppingCartInitialized event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCartInitializedData {
    /// The cart being opened.
    pub cart_id: AggregateId,

    /// The client who owns the cart.
    pub client_id: ClientId,

    /// Status recorded when the cart was opened.
    #[serde(default)]
    pub status: ShoppingCartStatus,
}

/// Data for ProductItemAdded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItemAddedData {
    /// The cart the item was added to.
    pub cart_id: AggregateId,

    /// The item, priced at the time of adding.
    pub product_item: PricedProductItem,
}

/// Data for ProductItemRemoved event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItemRemovedData {
    /// The cart the item was removed from.
    pub cart_id: AggregateId,

    /// The item, priced as it was when added.
    pub product_item: PricedProductItem,
}

/// Data for ShoppingCartConfirmed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCartConfirmedData {
    /// The cart that was confirmed.
    pub cart_id: AggregateId,

    /// When the cart was confirmed.
    pub confirmed_at: DateTime<Utc>,
}

// Convenience constructors for events
impl ShoppingCartEvent {
    /// Creates a ShoppingCartInitialized event for a pending cart.
    pub fn initialized(cart_id: AggregateId, client_id: ClientId) -> Self {
        ShoppingCartEvent::ShoppingCartInitialized(ShoppingCartInitializedData {
            cart_id,
            client_id,
            status: ShoppingCartStatus::Pending,
        })
    }

    /// Creates a ProductItemAdded event.
    pub fn product_item_added(cart_id: AggregateId, product_item: PricedProductItem) -> Self {
        ShoppingCartEvent::ProductItemAdded(ProductItemAddedData {
            cart_id,
            product_item,
        })
    }

    /// Creates a ProductItemRemoved event.
    pub fn product_item_removed(cart_id: AggregateId, product_item: PricedProductItem) -> Self {
        ShoppingCartEvent::ProductItemRemoved(ProductItemRemovedData {
            cart_id,
            product_item,
        })
    }

    /// Creates a ShoppingCartConfirmed event.
    pub fn confirmed(cart_id: AggregateId, confirmed_at: DateTime<Utc>) -> Self {
        ShoppingCartEvent::ShoppingCartConfirmed(ShoppingCartConfirmedData {
            cart_id,
            confirmed_at,
        })
    }
}
