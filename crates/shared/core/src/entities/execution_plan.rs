use rust_decimal::Decimal;
use serde::Serialize;

use super::Side;
use crate::values::{ExchangeId, OrderId, Price, Quantity};

/// One fill of a plan: how much to trade against which resting order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOrder {
    pub exchange_id: ExchangeId,
    /// The resting order this fill is drawn from
    pub order_id: OrderId,
    pub price: Price,
    /// Allocated quantity, never more than the resting order offers
    pub amount: Quantity,
}

impl ExecutionOrder {
    pub fn new(
        exchange_id: impl Into<ExchangeId>,
        order_id: OrderId,
        price: Price,
        amount: Quantity,
    ) -> Self {
        Self {
            exchange_id: exchange_id.into(),
            order_id,
            price,
            amount,
        }
    }

    /// Quote-currency value of the fill, `None` if it does not fit a `Decimal`
    pub fn cost(&self) -> Option<Decimal> {
        self.price.checked_mul(self.amount)
    }
}

/// Ordered fills that together satisfy one request.
///
/// Orders are kept in fill order. `total_cost` is only ever changed by
/// [`ExecutionPlan::add_order`], so it always equals the sum of
/// `price * amount` over the orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlan {
    side: Side,
    total_cost: Decimal,
    orders: Vec<ExecutionOrder>,
}

impl ExecutionPlan {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            total_cost: Decimal::ZERO,
            orders: Vec::new(),
        }
    }

    /// Append a fill and fold its value into the total.
    ///
    /// Returns the new total, or `None` (leaving the plan untouched) when the
    /// fill's value or the total would overflow.
    #[must_use]
    pub fn add_order(&mut self, order: ExecutionOrder) -> Option<Decimal> {
        let total = self.total_cost.checked_add(order.cost()?)?;
        self.total_cost = total;
        self.orders.push(order);
        Some(total)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Cost of a buy plan, revenue of a sell plan
    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    pub fn orders(&self) -> &[ExecutionOrder] {
        &self.orders
    }

    pub fn into_orders(self) -> Vec<ExecutionOrder> {
        self.orders
    }

    /// Total base-asset quantity across all fills
    pub fn total_amount(&self) -> Quantity {
        self.orders.iter().map(|o| o.amount).sum()
    }

    /// Volume-weighted price of the plan, `None` while empty
    pub fn average_price(&self) -> Option<Price> {
        let amount = self.total_amount();
        if amount.is_zero() {
            return None;
        }
        self.total_cost.checked_div(amount)
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_add_order_accumulates_cost() {
        let mut plan = ExecutionPlan::new(Side::Buy);
        assert_eq!(
            plan.add_order(ExecutionOrder::new("ex2", Uuid::new_v4(), dec!(2900), dec!(5))),
            Some(dec!(14500))
        );
        assert_eq!(
            plan.add_order(ExecutionOrder::new("ex1", Uuid::new_v4(), dec!(3000), dec!(1))),
            Some(dec!(17500))
        );

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.total_cost(), dec!(17500));
        assert_eq!(plan.total_amount(), dec!(6));
        assert_eq!(plan.orders()[0].exchange_id, "ex2");
        assert_eq!(plan.orders()[1].exchange_id, "ex1");
    }

    #[test]
    fn test_average_price() {
        let mut plan = ExecutionPlan::new(Side::Sell);
        assert_eq!(plan.average_price(), None);

        assert!(plan.add_order(ExecutionOrder::new("ex1", Uuid::new_v4(), dec!(3100), dec!(1))).is_some());
        assert!(plan.add_order(ExecutionOrder::new("ex1", Uuid::new_v4(), dec!(3000), dec!(1))).is_some());
        assert_eq!(plan.average_price(), Some(dec!(3050)));
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut plan = ExecutionPlan::new(Side::Buy);
        assert!(plan.add_order(ExecutionOrder::new("ex1", Uuid::nil(), dec!(3000), dec!(1))).is_some());

        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["totalCost"], "3000");
        assert_eq!(value["orders"][0]["exchangeId"], "ex1");
        assert_eq!(value["side"], "Buy");
    }

    #[test]
    fn test_overflowing_fill_is_rejected() {
        let mut plan = ExecutionPlan::new(Side::Sell);
        assert!(plan.add_order(ExecutionOrder::new("ex1", Uuid::nil(), dec!(3000), dec!(1))).is_some());

        let huge = ExecutionOrder::new("ex1", Uuid::nil(), Decimal::MAX, dec!(2));
        assert_eq!(huge.cost(), None);
        assert_eq!(plan.add_order(huge), None);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.total_cost(), dec!(3000));
    }
}
