//! Splitfill Ports
//!
//! Port definitions (traits) for the splitfill execution planner.
//! These define the boundaries between the planning core and the
//! snapshot sources and front ends around it.

mod error;
mod exchange_source;
mod planner;

pub use error::{PlanError, PlanResult, RepositoryError, RepositoryResult};
pub use exchange_source::ExchangeRepository;
pub use planner::ExecutionPlanner;
