use std::collections::HashMap;

use log::{debug, info, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use splitfill_core::{
    Exchange, ExecutionOrder, ExecutionPlan, OrderId, Price, Quantity, Side,
};
use splitfill_ports::{ExecutionPlanner, PlanError, PlanResult};

/// Decimal places kept when converting a euro reserve into a crypto quantity.
/// The quotient is truncated so a fill can never cost more than the reserve.
const FUNDS_CONVERSION_DP: u32 = 18;

/// One order-book entry eligible for the current request
#[derive(Debug)]
struct Candidate<'a> {
    exchange_id: &'a str,
    order_id: OrderId,
    price: Price,
    amount: Quantity,
}

/// Best-price-first execution planner
///
/// Orders are allocated based on:
/// 1. Best price (lowest ask for buys, highest bid for sells)
/// 2. Input order (exchanges, then their orders, as supplied) among equal prices
///
/// Each exchange can only contribute what its own reserve covers: euro for
/// buys, crypto for sells. Reserves are tracked in a per-call map, never on
/// the snapshots themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyExecutionPlanner;

impl GreedyExecutionPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Flatten the consumed side of every book and sort it best price first.
    /// `sort_by` is stable, so ties keep input order.
    fn collect_candidates(side: Side, exchanges: &[Exchange]) -> Vec<Candidate<'_>> {
        let mut candidates = Vec::new();

        for exchange in exchanges {
            for order in exchange.order_book.side_to_consume(side) {
                if !order.is_fillable() {
                    warn!(
                        "Skipping order {} on {}: amount {} at price {} is not fillable",
                        order.id, exchange.id, order.amount, order.price
                    );
                    continue;
                }

                candidates.push(Candidate {
                    exchange_id: &exchange.id,
                    order_id: order.id,
                    price: order.price,
                    amount: order.amount,
                });
            }
        }

        match side {
            Side::Buy => candidates.sort_by(|a, b| a.price.cmp(&b.price)),
            Side::Sell => candidates.sort_by(|a, b| b.price.cmp(&a.price)),
        }

        candidates
    }

    /// Remaining usable reserve per exchange, keyed by exchange id
    fn available_funds(side: Side, exchanges: &[Exchange]) -> PlanResult<HashMap<&str, Decimal>> {
        let mut funds = HashMap::with_capacity(exchanges.len());

        for exchange in exchanges {
            let reserve = exchange.available_funds.available_for(side);
            if funds.insert(exchange.id.as_str(), reserve).is_some() {
                return Err(PlanError::DuplicateExchange(exchange.id.clone()));
            }
        }

        Ok(funds)
    }

    /// Largest quantity that can be taken from `candidate` right now
    fn fillable_quantity(
        side: Side,
        candidate: &Candidate<'_>,
        remaining: Quantity,
        funds: Decimal,
    ) -> Quantity {
        let max_by_funds = match side {
            // Euro reserve converted into crypto at the candidate's price
            Side::Buy => funds
                .checked_div(candidate.price)
                .map(|q| q.round_dp_with_strategy(FUNDS_CONVERSION_DP, RoundingStrategy::ToZero))
                .unwrap_or(Decimal::MAX),
            // Crypto reserve is already in the traded asset
            Side::Sell => funds,
        };

        candidate
            .amount
            .min(remaining)
            .min(max_by_funds)
            .max(Decimal::ZERO)
    }

    /// Reserve consumed by a fill of `quantity` at `price`, `None` on overflow
    fn funds_used(side: Side, quantity: Quantity, price: Price) -> Option<Decimal> {
        match side {
            Side::Buy => quantity.checked_mul(price),
            Side::Sell => Some(quantity),
        }
    }
}

impl ExecutionPlanner for GreedyExecutionPlanner {
    fn name(&self) -> &str {
        "Greedy Best-Price"
    }

    fn calculate_plan(
        &self,
        side: Side,
        amount: Quantity,
        exchanges: &[Exchange],
    ) -> PlanResult<ExecutionPlan> {
        if amount <= Decimal::ZERO {
            return Err(PlanError::InvalidAmount(amount));
        }

        let mut funds = Self::available_funds(side, exchanges)?;
        let candidates = Self::collect_candidates(side, exchanges);

        debug!(
            "Planning {} {} across {} exchanges ({} candidates)",
            side,
            amount,
            exchanges.len(),
            candidates.len()
        );

        let mut plan = ExecutionPlan::new(side);
        let mut remaining = amount;

        for candidate in &candidates {
            if remaining <= Decimal::ZERO {
                break;
            }

            // Every candidate's exchange was registered by available_funds
            let Some(reserve) = funds.get_mut(candidate.exchange_id) else {
                continue;
            };

            let quantity = Self::fillable_quantity(side, candidate, remaining, *reserve);
            if quantity.is_zero() {
                continue;
            }

            let overflow = || PlanError::ArithmeticOverflow {
                amount: quantity,
                price: candidate.price,
            };
            let used = Self::funds_used(side, quantity, candidate.price).ok_or_else(overflow)?;

            plan.add_order(ExecutionOrder::new(
                candidate.exchange_id,
                candidate.order_id,
                candidate.price,
                quantity,
            ))
            .ok_or_else(overflow)?;

            *reserve -= used;
            remaining -= quantity;

            debug!(
                "Fill {} {} at {} on {} (order {}), {} left",
                side, quantity, candidate.price, candidate.exchange_id, candidate.order_id, remaining
            );
        }

        if remaining > Decimal::ZERO {
            let available = amount - remaining;
            let resting = exchanges
                .iter()
                .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.book_volume(side)?));
            info!(
                "Insufficient liquidity to {} {}: {} available within funds, {} resting in books",
                side,
                amount,
                available,
                resting.map_or_else(|| "overflowing".to_string(), |v| v.to_string())
            );
            return Err(PlanError::InsufficientLiquidity {
                side,
                requested: amount,
                available,
            });
        }

        Ok(plan)
    }
}
