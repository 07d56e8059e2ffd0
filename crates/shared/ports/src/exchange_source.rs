use async_trait::async_trait;
use splitfill_core::Exchange;

use crate::error::RepositoryResult;

/// Source of exchange snapshots
///
/// This port abstracts where snapshots come from (files, memory, network).
/// Implementations return every exchange they know about in a stable order,
/// and `RepositoryError::NoData` when they have none.
#[async_trait]
pub trait ExchangeRepository: Send + Sync {
    /// Get the complete current set of exchange snapshots
    async fn get_all_exchanges(&self) -> RepositoryResult<Vec<Exchange>>;
}
