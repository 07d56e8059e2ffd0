//! Execution plan service
//!
//! Splits a crypto buy or sell across several exchanges, taking the best
//! prices first while respecting each exchange's own euro and crypto reserves.
//!
//! # Architecture
//!
//! - **Application**: the `GetExecutionPlan` use case and its DTOs
//! - **Infrastructure**: snapshot sources (JSON directory, in-memory) and configuration
//! - **Presentation**: REST API and interactive console
//!
//! The data model, port traits and the planner itself live in the shared
//! `splitfill-core`, `splitfill-ports` and `splitfill-planner` crates.
//!
//! # Example
//!
//! ```ignore
//! use splitfill_service::{AppConfig, JsonExchangeRepository, PlanServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let repo = JsonExchangeRepository::new(&config.exchange_directory).unwrap();
//!     PlanServer::new(config, repo).run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use application::{
    ExchangeRepository, ExecutionOrderDto, ExecutionPlanDto, ExecutionPlanError,
    ExecutionPlanner, GetExecutionPlanRequest, GetExecutionPlanUseCase,
};

pub use infrastructure::{
    AppConfig, ConfigError, InMemoryExchangeRepository, JsonExchangeRepository, ServerConfig,
};

pub use presentation::{ApiError, AppState, create_router};

use axum::Router;
use splitfill_planner::GreedyExecutionPlanner;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The HTTP server: one snapshot source, one planner
pub struct PlanServer<R: ExchangeRepository + 'static> {
    pub config: AppConfig,
    pub exchange_repo: Arc<R>,
    pub planner: Arc<GreedyExecutionPlanner>,
}

impl<R: ExchangeRepository + 'static> PlanServer<R> {
    pub fn new(config: AppConfig, exchange_repo: R) -> Self {
        PlanServer {
            config,
            exchange_repo: Arc::new(exchange_repo),
            planner: Arc::new(GreedyExecutionPlanner::new()),
        }
    }

    /// Use case bound to this server's source and planner
    pub fn use_case(&self) -> GetExecutionPlanUseCase<R, GreedyExecutionPlanner> {
        GetExecutionPlanUseCase::new(Arc::clone(&self.exchange_repo), Arc::clone(&self.planner))
    }

    /// Create the REST API router
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.exchange_repo),
            Arc::clone(&self.planner),
        ));

        create_router(state)
    }

    /// Run the HTTP server until it fails
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.server.address();
        let router = self.router();

        tracing::info!("Execution plan service listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
