use rust_decimal::Decimal;
use serde::Serialize;

use super::{FundStorage, Order, OrderBook, Side};
use crate::values::{ExchangeId, Price, Quantity};

/// Snapshot of one exchange: identity, reserves and order book.
///
/// Read-only input to planning; the planner never mutates it. Snapshot
/// sources own their persisted layouts and convert into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub id: ExchangeId,
    pub available_funds: FundStorage,
    pub order_book: OrderBook,
}

impl Exchange {
    pub fn new(id: impl Into<ExchangeId>, available_funds: FundStorage) -> Self {
        Self {
            id: id.into(),
            available_funds,
            order_book: OrderBook::default(),
        }
    }

    /// Replace the bids with limit buy orders built from `(price, amount)` pairs
    pub fn with_bids(mut self, levels: impl IntoIterator<Item = (Price, Quantity)>) -> Self {
        self.order_book.bids = levels
            .into_iter()
            .map(|(price, amount)| Order::new(Side::Buy, amount, price))
            .collect();
        self
    }

    /// Replace the asks with limit sell orders built from `(price, amount)` pairs
    pub fn with_asks(mut self, levels: impl IntoIterator<Item = (Price, Quantity)>) -> Self {
        self.order_book.asks = levels
            .into_iter()
            .map(|(price, amount)| Order::new(Side::Sell, amount, price))
            .collect();
        self
    }

    /// Raw volume resting on the side a `side` request consumes, ignoring
    /// funds. `None` if the sum overflows.
    pub fn book_volume(&self, side: Side) -> Option<Quantity> {
        self.order_book
            .side_to_consume(side)
            .iter()
            .try_fold(Decimal::ZERO, |acc, order| acc.checked_add(order.amount))
    }
}
