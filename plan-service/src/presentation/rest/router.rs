use axum::{Router, routing::get};
use splitfill_planner::GreedyExecutionPlanner;
use splitfill_ports::ExchangeRepository;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;

/// Application state shared across handlers
pub struct AppState<R: ExchangeRepository> {
    pub exchange_repo: Arc<R>,
    pub planner: Arc<GreedyExecutionPlanner>,
}

impl<R: ExchangeRepository> AppState<R> {
    pub fn new(exchange_repo: Arc<R>, planner: Arc<GreedyExecutionPlanner>) -> Self {
        AppState {
            exchange_repo,
            planner,
        }
    }
}

/// Create the REST API router
pub fn create_router<R: ExchangeRepository + 'static>(state: Arc<AppState<R>>) -> Router {
    Router::new()
        .route("/api/ping", get(handlers::ping))
        .route("/api/executionplan", get(handlers::execution_plan::<R>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
