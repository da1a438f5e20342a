//! Shopping cart aggregate implementation.

use chrono::{DateTime, Utc};
use common::{AggregateId, ClientId};
use serde::Serialize;

use crate::aggregate::{Aggregate, DomainEvent};

use super::{
    Money, ProductItems, ShoppingCartError, ShoppingCartEvent, ShoppingCartStatus,
    events::ShoppingCartInitializedData,
};

/// Shopping cart aggregate root.
///
/// A snapshot is only ever produced by [`Aggregate::apply`]; every applied
/// event yields a fresh value and leaves the previous snapshot as it was.
/// Snapshots serialize for display but cannot be deserialized, so none can
/// exist outside a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingCart {
    /// Unique cart identifier.
    id: AggregateId,

    /// Client who owns the cart.
    client_id: ClientId,

    /// Current status of the cart.
    status: ShoppingCartStatus,

    /// Priced product items currently in the cart.
    product_items: ProductItems,

    /// Set once the cart has been confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    confirmed_at: Option<DateTime<Utc>>,
}

impl Aggregate for ShoppingCart {
    type Event = ShoppingCartEvent;
    type Error = ShoppingCartError;

    fn aggregate_type() -> &'static str {
        "ShoppingCart"
    }

    fn id(&self) -> AggregateId {
        self.id
    }

    fn apply(previous: Option<&Self>, event: &Self::Event) -> Result<Self, Self::Error> {
        let next = match event {
            ShoppingCartEvent::ShoppingCartInitialized(data) => match previous {
                None => Self::initialized(data),
                Some(cart) => {
                    return Err(ShoppingCartError::AlreadyInitialized { cart_id: cart.id });
                }
            },
            ShoppingCartEvent::ProductItemAdded(data) => {
                let cart = Self::existing(previous, event)?;
                cart.with_product_items(cart.product_items.add(data.product_item))
            }
            ShoppingCartEvent::ProductItemRemoved(data) => {
                let cart = Self::existing(previous, event)?;
                cart.with_product_items(cart.product_items.remove(&data.product_item))
            }
            ShoppingCartEvent::ShoppingCartConfirmed(data) => {
                Self::existing(previous, event)?.confirmed(data.confirmed_at)
            }
        };

        metrics::counter!(
            "shopping_cart_events_applied_total",
            "event_type" => event.event_type()
        )
        .increment(1);
        tracing::trace!(
            cart_id = %next.id,
            event_type = event.event_type(),
            status = %next.status,
            items = next.product_items.len(),
            "applied event"
        );

        Ok(next)
    }
}

// Query methods
impl ShoppingCart {
    /// Returns the client ID.
    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Returns the current status.
    pub fn status(&self) -> ShoppingCartStatus {
        self.status
    }

    /// Returns the product items in the cart.
    pub fn product_items(&self) -> &ProductItems {
        &self.product_items
    }

    /// Returns when the cart was confirmed, if it has been.
    pub fn confirmed_at(&self) -> Option<DateTime<Utc>> {
        self.confirmed_at
    }

    /// Returns true if the cart has been confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.status == ShoppingCartStatus::Confirmed
    }

    /// Returns the number of item entries.
    pub fn item_count(&self) -> usize {
        self.product_items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u32 {
        self.product_items.total_quantity()
    }

    /// Returns the total amount.
    pub fn total_amount(&self) -> Money {
        self.product_items.total_amount()
    }
}

// Transition helpers
impl ShoppingCart {
    // The status carried by the event is not trusted: a fresh cart is always pending.
    fn initialized(data: &ShoppingCartInitializedData) -> Self {
        Self {
            id: data.cart_id,
            client_id: data.client_id,
            status: ShoppingCartStatus::Pending,
            product_items: ProductItems::empty(),
            confirmed_at: None,
        }
    }

    fn existing<'a>(
        previous: Option<&'a Self>,
        event: &ShoppingCartEvent,
    ) -> Result<&'a Self, ShoppingCartError> {
        let cart = previous.ok_or_else(|| ShoppingCartError::NotInitialized {
            event_type: event.event_type(),
        })?;

        let actual = event.aggregate_id();
        if actual != cart.id {
            return Err(ShoppingCartError::CartMismatch {
                expected: cart.id,
                actual,
            });
        }

        Ok(cart)
    }

    fn with_product_items(&self, product_items: ProductItems) -> Self {
        Self {
            id: self.id,
            client_id: self.client_id,
            status: self.status,
            product_items,
            confirmed_at: self.confirmed_at,
        }
    }

    fn confirmed(&self, confirmed_at: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            client_id: self.client_id,
            status: ShoppingCartStatus::Confirmed,
            product_items: self.product_items.clone(),
            confirmed_at: Some(confirmed_at),
        }
    }
}
