//! Domain layer for the shopping cart event replay.
//!
//! This crate provides:
//! - Aggregate trait with replay of an ordered event sequence
//! - DomainEvent trait for domain events
//! - Shopping cart aggregate, its events and value objects

pub mod aggregate;
pub mod error;
pub mod shopping_cart;

pub use aggregate::{Aggregate, DomainEvent};
pub use error::ReplayError;
pub use shopping_cart::{
    Money, PricedProductItem, ProductItem, ProductItems, ShoppingCart, ShoppingCartError,
    ShoppingCartEvent, ShoppingCartStatus,
};
