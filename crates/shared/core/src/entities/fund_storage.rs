use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;

/// Reserves held on one exchange.
///
/// `crypto` caps what can be sold there, `euro` caps what can be bought there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundStorage {
    #[serde(default)]
    pub crypto: Decimal,
    #[serde(default)]
    pub euro: Decimal,
}

impl FundStorage {
    pub fn new(crypto: Decimal, euro: Decimal) -> Self {
        Self { crypto, euro }
    }

    /// The reserve that constrains a request in direction `side`
    pub fn available_for(&self, side: Side) -> Decimal {
        match side {
            Side::Buy => self.euro,
            Side::Sell => self.crypto,
        }
    }
}
