use axum::{
    Json,
    extract::{Query, State},
};
use rust_decimal::Decimal;
use splitfill_core::Side;
use splitfill_ports::ExchangeRepository;
use std::sync::Arc;
use tracing::warn;

use crate::application::{ExecutionPlanDto, GetExecutionPlanRequest, GetExecutionPlanUseCase};
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /api/ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {})
}

/// GET /api/executionplan
pub async fn execution_plan<R: ExchangeRepository>(
    Query(query): Query<ExecutionPlanQuery>,
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<ExecutionPlanDto>, ApiError> {
    let request = parse_query(&query)?;

    let use_case = GetExecutionPlanUseCase::new(
        Arc::clone(&state.exchange_repo),
        Arc::clone(&state.planner),
    );

    use_case.execute(request).await.map(Json).map_err(|e| {
        warn!(error = %e, "Execution plan request failed");
        ApiError::from(e)
    })
}

fn parse_query(query: &ExecutionPlanQuery) -> Result<GetExecutionPlanRequest, ApiError> {
    let side: Side = query
        .order_type
        .as_deref()
        .ok_or_else(|| ApiError::missing_parameter("orderType"))?
        .try_into()
        .map_err(|_| ApiError::invalid_parameter("orderType", "must be buy or sell"))?;

    let amount = query
        .order_amount
        .as_deref()
        .ok_or_else(|| ApiError::missing_parameter("orderAmount"))?
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ApiError::invalid_parameter("orderAmount", "invalid decimal"))?;

    Ok(GetExecutionPlanRequest { side, amount })
}
