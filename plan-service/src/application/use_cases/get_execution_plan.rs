use rust_decimal::Decimal;
use splitfill_ports::{
    ExchangeRepository, ExecutionPlanner, PlanError, RepositoryError,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::application::dto::{ExecutionPlanDto, GetExecutionPlanRequest};

/// Why a plan could not be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionPlanError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("{0}")]
    InsufficientLiquidity(PlanError),

    #[error("No exchange data available")]
    NoData,

    #[error("Exchange data unavailable: {0}")]
    Repository(RepositoryError),
}

impl From<PlanError> for ExecutionPlanError {
    fn from(err: PlanError) -> Self {
        if err.is_validation() {
            ExecutionPlanError::Validation(err.to_string())
        } else {
            ExecutionPlanError::InsufficientLiquidity(err)
        }
    }
}

impl From<RepositoryError> for ExecutionPlanError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NoData => ExecutionPlanError::NoData,
            other => ExecutionPlanError::Repository(other),
        }
    }
}

/// Loads the current snapshots and plans one request against them
pub struct GetExecutionPlanUseCase<R, P>
where
    R: ExchangeRepository,
    P: ExecutionPlanner,
{
    exchange_repo: Arc<R>,
    planner: Arc<P>,
}

impl<R, P> GetExecutionPlanUseCase<R, P>
where
    R: ExchangeRepository,
    P: ExecutionPlanner,
{
    pub fn new(exchange_repo: Arc<R>, planner: Arc<P>) -> Self {
        Self {
            exchange_repo,
            planner,
        }
    }

    pub async fn execute(
        &self,
        request: GetExecutionPlanRequest,
    ) -> Result<ExecutionPlanDto, ExecutionPlanError> {
        // Reject before touching the snapshot source
        if request.amount <= Decimal::ZERO {
            return Err(ExecutionPlanError::Validation(
                "Order amount must be greater than zero.".to_string(),
            ));
        }

        let exchanges = self.exchange_repo.get_all_exchanges().await?;
        if exchanges.is_empty() {
            return Err(ExecutionPlanError::NoData);
        }

        debug!(
            planner = self.planner.name(),
            exchanges = exchanges.len(),
            "Calculating execution plan"
        );

        let plan = self
            .planner
            .calculate_plan(request.side, request.amount, &exchanges)?;

        info!(
            side = %request.side,
            amount = %request.amount,
            fills = plan.len(),
            total = %plan.total_cost(),
            "Execution plan calculated"
        );

        Ok(plan.into())
    }
}
