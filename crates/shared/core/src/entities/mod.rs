mod exchange;
mod execution_plan;
mod fund_storage;
mod order;
mod order_book;
mod order_kind;
mod side;

pub use exchange::Exchange;
pub use execution_plan::{ExecutionOrder, ExecutionPlan};
pub use fund_storage::FundStorage;
pub use order::Order;
pub use order_book::OrderBook;
pub use order_kind::OrderKind;
pub use side::Side;
