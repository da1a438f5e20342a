//! Shared identifier types for the shopping cart event replay.

mod ids;

pub use ids::{AggregateId, ClientId, ProductId};
