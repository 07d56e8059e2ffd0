use rust_decimal::Decimal;
use splitfill_core::{Quantity, Side};
use thiserror::Error;

/// Domain-level errors for execution planning
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Order amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    #[error("Exchange id '{0}' appears more than once in the snapshot")]
    DuplicateExchange(String),

    #[error("Order of {amount} at price {price} exceeds the representable value range")]
    ArithmeticOverflow { amount: Quantity, price: Decimal },

    #[error(
        "Insufficient liquidity to {side} {requested}: only {available} can be filled within available funds"
    )]
    InsufficientLiquidity {
        side: Side,
        requested: Quantity,
        available: Quantity,
    },
}

impl PlanError {
    /// True for rejections of the request itself, as opposed to a market shortfall
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlanError::InvalidAmount(_)
                | PlanError::DuplicateExchange(_)
                | PlanError::ArithmeticOverflow { .. }
        )
    }
}

pub type PlanResult<T> = std::result::Result<T, PlanError>;

/// Errors raised by snapshot sources
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("No exchange data available")]
    NoData,

    #[error("Exchange directory does not exist: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;
