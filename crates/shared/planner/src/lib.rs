//! Splitfill Planning Algorithms
//!
//! Implementations of the execution planning port.

mod greedy;

pub use greedy::GreedyExecutionPlanner;

// Re-export the trait from ports for convenience
pub use splitfill_ports::{ExecutionPlanner, PlanError, PlanResult};
