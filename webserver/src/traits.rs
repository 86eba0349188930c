//! Service trait definitions for dependency injection
//!
//! Storage I/O is abstracted behind these traits so the store can be tested
//! without touching disk.

use async_trait::async_trait;
use shared::ScoreEntry;

use crate::error::WebServerResult;

/// Persistent backing for the score collection
#[mockall::automock]
#[async_trait]
pub trait ScoreStorage: Send + Sync {
    /// Read the whole persisted collection
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet. Unreadable or
    /// corrupt storage is an error.
    async fn read_scores(&self) -> WebServerResult<Option<Vec<ScoreEntry>>>;

    /// Replace the persisted collection with `scores`
    async fn write_scores(&self, scores: &[ScoreEntry]) -> WebServerResult<()>;

    /// Human readable location, used in logs
    fn location(&self) -> String;
}
