//! Splitfill Core Domain
//!
//! Pure domain types for the splitfill execution planner: exchange snapshots
//! (funds + order book) going in, execution plans coming out.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Snapshot input
    Exchange,
    // Plan output
    ExecutionOrder,
    ExecutionPlan,
    FundStorage,
    Order,
    OrderBook,
    OrderKind,
    Side,
};
pub use values::{ExchangeId, OrderId, Price, Quantity, Timestamp};
