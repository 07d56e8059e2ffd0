use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitfill_core::{ExecutionOrder, ExecutionPlan, OrderId, Side};

/// Request for an execution plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetExecutionPlanRequest {
    pub side: Side,
    /// Amount of crypto to buy or sell
    pub amount: Decimal,
}

/// A single fill as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOrderDto {
    pub exchange_id: String,
    pub order_id: OrderId,
    pub price: Decimal,
    pub amount: Decimal,
}

impl From<ExecutionOrder> for ExecutionOrderDto {
    fn from(order: ExecutionOrder) -> Self {
        ExecutionOrderDto {
            exchange_id: order.exchange_id,
            order_id: order.order_id,
            price: order.price,
            amount: order.amount,
        }
    }
}

/// Execution plan as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlanDto {
    pub side: Side,
    /// Cost for a buy, revenue for a sell
    pub total_cost: Decimal,
    pub total_amount: Decimal,
    pub orders: Vec<ExecutionOrderDto>,
}

impl From<ExecutionPlan> for ExecutionPlanDto {
    fn from(plan: ExecutionPlan) -> Self {
        ExecutionPlanDto {
            side: plan.side(),
            total_cost: plan.total_cost(),
            total_amount: plan.total_amount(),
            orders: plan.into_orders().into_iter().map(Into::into).collect(),
        }
    }
}
