use splitfill_core::{Exchange, ExecutionPlan, Quantity, Side};

use crate::error::PlanResult;

/// Port for execution planning algorithms
///
/// Given a direction, an amount of the base asset and a set of exchange
/// snapshots, produce the fills that satisfy the whole amount, or fail.
/// Implementations must be pure: no mutation of the snapshots, and the same
/// input always yields the same plan.
pub trait ExecutionPlanner: Send + Sync {
    /// Compute a complete plan. A request that cannot be fully satisfied
    /// returns an error, never a partial plan.
    fn calculate_plan(
        &self,
        side: Side,
        amount: Quantity,
        exchanges: &[Exchange],
    ) -> PlanResult<ExecutionPlan>;

    /// Get the name of the algorithm
    fn name(&self) -> &str;
}
