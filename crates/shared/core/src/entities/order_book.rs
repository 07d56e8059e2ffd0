use serde::Serialize;

use super::{Order, Side};

/// Resting orders of one exchange, in the order the snapshot lists them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderBook {
    /// Standing buy interest, consumed when the caller sells
    pub bids: Vec<Order>,
    /// Standing sell interest, consumed when the caller buys
    pub asks: Vec<Order>,
}

impl OrderBook {
    pub fn new(bids: Vec<Order>, asks: Vec<Order>) -> Self {
        Self { bids, asks }
    }

    /// The side of the book a request in direction `side` draws liquidity from
    pub fn side_to_consume(&self, side: Side) -> &[Order] {
        match side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
