pub mod dto;
pub mod use_cases;

// Port traits live in the shared kernel; re-exported for callers of this crate
pub use splitfill_ports::{ExchangeRepository, ExecutionPlanner};

pub use dto::{ExecutionOrderDto, ExecutionPlanDto, GetExecutionPlanRequest};
pub use use_cases::{ExecutionPlanError, GetExecutionPlanUseCase};
