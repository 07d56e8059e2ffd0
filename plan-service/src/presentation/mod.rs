pub mod console;
pub mod rest;

pub use rest::{ApiError, AppState, create_router};
