use serde::{Deserialize, Serialize};

/// Kind of a resting order. Snapshots only ever carry limit orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// Execute at specified price or better
    #[default]
    #[serde(alias = "limit", alias = "LIMIT")]
    Limit,
}
