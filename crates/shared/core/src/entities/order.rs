use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{OrderKind, Side};
use crate::values::{OrderId, Price, Quantity, Timestamp};

/// A single resting order in an exchange's order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub time: Timestamp,
    /// Buy for bids, Sell for asks
    #[serde(rename = "type")]
    pub side: Side,
    #[serde(default)]
    pub kind: OrderKind,
    /// Quantity of the base asset offered
    pub amount: Quantity,
    /// Quote-currency unit price
    pub price: Price,
}

impl Order {
    /// Create a new limit order with explicit timestamp
    pub fn new_with_time(side: Side, amount: Quantity, price: Price, time: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            side,
            kind: OrderKind::Limit,
            amount,
            price,
        }
    }

    /// Create a new limit order using current system time
    pub fn new(side: Side, amount: Quantity, price: Price) -> Self {
        Self::new_with_time(side, amount, price, Utc::now())
    }

    /// True when the entry can contribute volume to a plan
    pub fn is_fillable(&self) -> bool {
        self.amount > Decimal::ZERO && self.price > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fillable() {
        assert!(Order::new(Side::Sell, dec!(1), dec!(3000)).is_fillable());
        assert!(!Order::new(Side::Sell, dec!(0), dec!(3000)).is_fillable());
        assert!(!Order::new(Side::Buy, dec!(1), dec!(0)).is_fillable());
    }

    #[test]
    fn test_persisted_field_names() {
        let json = r#"{
            "id": "6a2a3c1e-7b59-4b1c-9a5e-3d3f0b0d6f11",
            "time": "2024-03-01T10:15:00Z",
            "type": "Sell",
            "kind": "Limit",
            "amount": "0.405",
            "price": "57226.46"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.kind, OrderKind::Limit);
        assert_eq!(order.amount, dec!(0.405));
        assert_eq!(order.price, dec!(57226.46));
    }
}
