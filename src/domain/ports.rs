use crate::domain::model::{CardPage, LeaderboardEntry};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Byte-level access to documents under some root. `read_file` returns
/// `Ok(None)` when the document does not exist.
pub trait Storage: Send + Sync {
    fn read_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn describe(&self, path: &str) -> String;
}

#[async_trait]
pub trait BingoApi: Send + Sync {
    /// Generates a fresh card for `identifier` and records the visit.
    async fn card(&self, identifier: &str) -> Result<CardPage>;
    async fn leaderboard(&self) -> Vec<LeaderboardEntry>;
}
