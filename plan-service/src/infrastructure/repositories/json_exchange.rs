use async_trait::async_trait;
use serde::Deserialize;
use splitfill_core::{Exchange, FundStorage, Order, OrderBook};
use splitfill_ports::{ExchangeRepository, RepositoryError, RepositoryResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

const FILE_PREFIX: &str = "exchange-";
const FILE_EXTENSION: &str = ".json";

/// Persisted layout of one exchange snapshot file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeRecord {
    id: String,
    #[serde(default)]
    available_funds: FundStorage,
    #[serde(default)]
    order_book: OrderBookRecord,
}

#[derive(Debug, Default, Deserialize)]
struct OrderBookRecord {
    #[serde(default)]
    bids: Vec<OrderEntryRecord>,
    #[serde(default)]
    asks: Vec<OrderEntryRecord>,
}

/// Each bid/ask wraps its order
#[derive(Debug, Deserialize)]
struct OrderEntryRecord {
    order: Order,
}

impl From<ExchangeRecord> for Exchange {
    fn from(record: ExchangeRecord) -> Self {
        Exchange {
            id: record.id,
            available_funds: record.available_funds,
            order_book: OrderBook::new(
                record.order_book.bids.into_iter().map(|e| e.order).collect(),
                record.order_book.asks.into_iter().map(|e| e.order).collect(),
            ),
        }
    }
}

/// Snapshot source backed by a directory of `exchange-*.json` files
///
/// Files are read in file-name order on every call, so the exchange order
/// (and with it the tie-break between equal prices) is stable. Unreadable or
/// malformed files are logged and skipped.
#[derive(Debug, Clone)]
pub struct JsonExchangeRepository {
    directory: PathBuf,
}

impl JsonExchangeRepository {
    pub fn new(directory: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let directory = directory.into();
        if !directory.is_dir() {
            return Err(RepositoryError::DirectoryNotFound(
                directory.display().to_string(),
            ));
        }

        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn is_exchange_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(FILE_PREFIX) && name.ends_with(FILE_EXTENSION))
    }

    /// Matching files, sorted by name
    async fn exchange_files(&self) -> RepositoryResult<Vec<PathBuf>> {
        let io_error = |e: std::io::Error| RepositoryError::Io {
            path: self.directory.display().to_string(),
            error: e.to_string(),
        };

        let mut entries = tokio::fs::read_dir(&self.directory).await.map_err(io_error)?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if !Self::is_exchange_file(&path) {
                continue;
            }
            if entry.file_type().await.map_err(io_error)?.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Parse one snapshot file; `Ok(None)` for a file holding JSON `null`
    async fn load_file(path: &Path) -> Result<Option<Exchange>, String> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| e.to_string())?;

        let record: Option<ExchangeRecord> =
            serde_json::from_str(&content).map_err(|e| e.to_string())?;

        Ok(record.map(Exchange::from))
    }
}

#[async_trait]
impl ExchangeRepository for JsonExchangeRepository {
    async fn get_all_exchanges(&self) -> RepositoryResult<Vec<Exchange>> {
        let files = self.exchange_files().await?;
        let mut seen = HashSet::new();
        let mut exchanges = Vec::with_capacity(files.len());

        for path in &files {
            match Self::load_file(path).await {
                Ok(Some(exchange)) if exchange.id.trim().is_empty() => {
                    warn!(file = %path.display(), "Skipping exchange with empty id");
                }
                Ok(Some(exchange)) => {
                    if !seen.insert(exchange.id.clone()) {
                        warn!(
                            file = %path.display(),
                            exchange = %exchange.id,
                            "Skipping duplicate exchange id"
                        );
                        continue;
                    }
                    debug!(
                        file = %path.display(),
                        exchange = %exchange.id,
                        bids = exchange.order_book.bids.len(),
                        asks = exchange.order_book.asks.len(),
                        "Loaded exchange snapshot"
                    );
                    exchanges.push(exchange);
                }
                Ok(None) => {
                    warn!(file = %path.display(), "Deserialization returned null");
                }
                Err(e) => {
                    error!(file = %path.display(), error = %e, "Error deserializing file");
                }
            }
        }

        if exchanges.is_empty() {
            return Err(RepositoryError::NoData);
        }

        Ok(exchanges)
    }
}
