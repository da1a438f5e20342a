//! Value objects for the shopping cart domain.

use common::ProductId;
use serde::{Deserialize, Serialize};

/// An amount of money in cents.
///
/// Arithmetic saturates at the `i64` bounds, so totals over arbitrary
/// recorded prices never overflow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates an amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole dollars.
    pub fn from_dollars(dollars: i64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the price of `quantity` units at this unit price.
    pub fn times(&self, quantity: u32) -> Money {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A product and how many units of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductItem {
    /// The product identifier.
    pub product_id: ProductId,

    /// Number of units.
    pub quantity: u32,
}

impl ProductItem {
    /// Creates a new product item.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A product item together with the unit price it had when the fact was recorded.
///
/// Two priced items are equal only if product, quantity and price all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PricedProductItem {
    /// The product and quantity.
    pub product_item: ProductItem,

    /// Price per unit.
    pub unit_price: Money,
}

impl PricedProductItem {
    /// Creates a new priced product item.
    pub fn new(product_item: ProductItem, unit_price: Money) -> Self {
        Self {
            product_item,
            unit_price,
        }
    }

    /// Returns the product identifier.
    pub fn product_id(&self) -> ProductId {
        self.product_item.product_id
    }

    /// Returns the number of units.
    pub fn quantity(&self) -> u32 {
        self.product_item.quantity
    }

    /// Returns quantity times unit price.
    pub fn total_price(&self) -> Money {
        self.unit_price.times(self.product_item.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_dollars() {
        assert_eq!(Money::from_dollars(150).cents(), 15000);
        assert_eq!(Money::from_dollars(i64::MAX).cents(), i64::MAX);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
        assert_eq!(
            Money::from_cents(i64::MIN).to_string(),
            "-$92233720368547758.08"
        );
    }

    #[test]
    fn test_money_saturates_instead_of_overflowing() {
        let max = Money::from_cents(i64::MAX);

        assert_eq!(max.times(2), max);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(Money::from_cents(i64::MIN).times(3).cents(), i64::MIN);
        assert_eq!([max, max, max].into_iter().sum::<Money>(), max);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [100, 250, 50].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 400);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert_eq!(empty, Money::zero());
    }

    #[test]
    fn test_priced_item_total_price() {
        let item = PricedProductItem::new(
            ProductItem::new(ProductId::new(), 3),
            Money::from_cents(1000),
        );
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.total_price().cents(), 3000);
    }

    #[test]
    fn test_priced_item_equality_needs_every_field() {
        let product_id = ProductId::new();
        let item = PricedProductItem::new(ProductItem::new(product_id, 1), Money::from_dollars(100));

        let same = PricedProductItem::new(ProductItem::new(product_id, 1), Money::from_dollars(100));
        let other_quantity =
            PricedProductItem::new(ProductItem::new(product_id, 2), Money::from_dollars(100));
        let other_price =
            PricedProductItem::new(ProductItem::new(product_id, 1), Money::from_dollars(99));

        assert_eq!(item, same);
        assert_ne!(item, other_quantity);
        assert_ne!(item, other_price);
    }

    #[test]
    fn test_priced_item_json_shape() {
        let product_id = ProductId::new();
        let item = PricedProductItem::new(ProductItem::new(product_id, 2), Money::from_cents(999));

        let json = serde_json::to_value(item).unwrap();

        assert_eq!(json["product_item"]["quantity"], 2);
        assert_eq!(json["product_item"]["product_id"], product_id.to_string());
        assert_eq!(json["unit_price"], 999);
    }
}
