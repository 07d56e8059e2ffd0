use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;
use splitfill_core::{Exchange, ExchangeId};
use splitfill_ports::{ExchangeRepository, RepositoryError, RepositoryResult};
use std::sync::Arc;

/// In-memory snapshot source
///
/// Keeps exchanges in insertion order so planning ties resolve the same way
/// on every call. Replacing an exchange keeps its original position.
pub struct InMemoryExchangeRepository {
    exchanges: Arc<RwLock<IndexMap<ExchangeId, Exchange>>>,
}

impl InMemoryExchangeRepository {
    pub fn new() -> Self {
        InMemoryExchangeRepository {
            exchanges: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Seed the repository; a later snapshot with a repeated id replaces the earlier one
    pub fn with_exchanges(exchanges: impl IntoIterator<Item = Exchange>) -> Self {
        let repo = Self::new();
        for exchange in exchanges {
            repo.upsert(exchange);
        }
        repo
    }

    /// Insert or replace a snapshot, returning the one it replaced
    pub fn upsert(&self, exchange: Exchange) -> Option<Exchange> {
        self.exchanges.write().insert(exchange.id.clone(), exchange)
    }

    pub fn len(&self) -> usize {
        self.exchanges.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.read().is_empty()
    }
}

impl Default for InMemoryExchangeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryExchangeRepository {
    fn clone(&self) -> Self {
        InMemoryExchangeRepository {
            exchanges: Arc::clone(&self.exchanges),
        }
    }
}

#[async_trait]
impl ExchangeRepository for InMemoryExchangeRepository {
    async fn get_all_exchanges(&self) -> RepositoryResult<Vec<Exchange>> {
        let exchanges: Vec<Exchange> = self.exchanges.read().values().cloned().collect();

        if exchanges.is_empty() {
            return Err(RepositoryError::NoData);
        }

        Ok(exchanges)
    }
}
