//! Driver that replays a shopping cart's events and renders the result.

pub mod config;
pub mod error;

use std::path::Path;

use chrono::{DateTime, Utc};
use common::{AggregateId, ClientId, ProductId};
use domain::{Aggregate, Money, PricedProductItem, ProductItem, ShoppingCart, ShoppingCartEvent};

pub use config::{Config, LogFormat};
pub use error::CliError;

/// Builds the demonstration history: two products added, one removed, cart confirmed.
pub fn sample_events(
    cart_id: AggregateId,
    client_id: ClientId,
    confirmed_at: DateTime<Utc>,
) -> Vec<ShoppingCartEvent> {
    let shoes = PricedProductItem::new(
        ProductItem::new(ProductId::new(), 1),
        Money::from_dollars(100),
    );
    let shirt = PricedProductItem::new(
        ProductItem::new(ProductId::new(), 2),
        Money::from_dollars(150),
    );

    vec![
        ShoppingCartEvent::initialized(cart_id, client_id),
        ShoppingCartEvent::product_item_added(cart_id, shoes),
        ShoppingCartEvent::product_item_added(cart_id, shirt),
        ShoppingCartEvent::product_item_removed(cart_id, shoes),
        ShoppingCartEvent::confirmed(cart_id, confirmed_at),
    ]
}

/// Reads a JSON array of events from `path`.
pub fn load_events(path: &Path) -> Result<Vec<ShoppingCartEvent>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replays the configured events and returns the resulting cart.
///
/// Without an events file the sample history is replayed.
#[tracing::instrument(skip_all, fields(events_file = ?config.events_file))]
pub fn run(config: &Config) -> Result<Option<ShoppingCart>, CliError> {
    let events = match &config.events_file {
        Some(path) => load_events(path)?,
        None => sample_events(AggregateId::new(), ClientId::new(), Utc::now()),
    };
    tracing::info!(events = events.len(), "replaying shopping cart");

    let cart = ShoppingCart::replay(&events)?;
    match &cart {
        Some(cart) => tracing::info!(
            cart_id = %cart.id(),
            status = %cart.status(),
            items = cart.item_count(),
            total = %cart.total_amount(),
            "cart rebuilt"
        ),
        None => tracing::info!("no events, no cart"),
    }

    Ok(cart)
}

/// Renders the replay result as pretty JSON; an absent cart renders as `null`.
pub fn render(cart: Option<&ShoppingCart>) -> Result<String, CliError> {
    serde_json::to_string_pretty(&cart).map_err(CliError::Render)
}
