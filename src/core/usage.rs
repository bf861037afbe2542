use crate::core::Storage;
use crate::domain::model::{LeaderboardEntry, UsageStats};
use crate::utils::error::{BingoError, Result};
use tokio::sync::Mutex;

/// Visit counters kept as one JSON document, reloaded on every call.
///
/// Increments made through one `UsageStore` are serialized, so a single
/// server never loses a visit. Several processes sharing the same document
/// can still overwrite each other's increments.
pub struct UsageStore<S: Storage> {
    storage: S,
    path: String,
    write_lock: Mutex<()>,
}

impl<S: Storage> UsageStore<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the whole document. A missing, unreadable or corrupt document
    /// reads as empty.
    pub async fn read(&self) -> UsageStats {
        let bytes = match self.storage.read_file(&self.path).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return UsageStats::new(),
            Err(e) => {
                tracing::warn!(
                    file = %self.storage.describe(&self.path),
                    "usage stats unreadable, starting from empty: {}",
                    e
                );
                return UsageStats::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(
                    file = %self.storage.describe(&self.path),
                    "usage stats corrupt, starting from empty: {}",
                    e
                );
                UsageStats::new()
            }
        }
    }

    /// Replaces the whole document with `stats`.
    pub async fn write(&self, stats: &UsageStats) -> Result<()> {
        let data = serde_json::to_vec(stats)?;
        self.storage
            .write_file(&self.path, &data)
            .await
            .map_err(|e| match e {
                BingoError::IoError(source) => BingoError::StatsWriteError {
                    path: self.storage.describe(&self.path),
                    source,
                },
                other => other,
            })
    }

    /// Adds one visit to `identifier` and returns its new count.
    pub async fn increment(&self, identifier: &str) -> Result<u64> {
        let _guard = self.write_lock.lock().await;

        let mut stats = self.read().await;
        let count = stats.entry(identifier.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;

        self.write(&stats).await?;
        tracing::debug!(identifier, count, "recorded card visit");
        Ok(count)
    }

    pub async fn list_all(&self) -> UsageStats {
        self.read().await
    }

    /// Entries ordered by descending hits, then identifier.
    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .list_all()
            .await
            .into_iter()
            .map(|(identifier, hits)| LeaderboardEntry { identifier, hits })
            .collect();
        entries.sort_by(|a, b| b.hits.cmp(&a.hits).then_with(|| a.identifier.cmp(&b.identifier)));
        entries
    }
}
