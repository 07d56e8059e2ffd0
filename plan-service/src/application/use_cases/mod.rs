mod get_execution_plan;

pub use get_execution_plan::{ExecutionPlanError, GetExecutionPlanUseCase};
