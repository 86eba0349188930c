//! High score store
//!
//! Every operation re-reads storage; nothing is cached between requests.
//! Submissions run their read-modify-write cycle under a write lock so
//! concurrent requests in this process cannot overwrite each other's entries.

use shared::ranking::{insert_ranked, top_n};
use shared::{Placement, ScoreEntry, ScoreLimits, app_debug, app_info, default_scores};
use tokio::sync::Mutex;

use crate::error::WebServerResult;
use crate::traits::ScoreStorage;

pub struct HighScoreStore<S: ScoreStorage> {
    storage: S,
    limits: ScoreLimits,
    write_lock: Mutex<()>,
}

impl<S: ScoreStorage> HighScoreStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_limits(storage, ScoreLimits::default())
    }

    pub fn with_limits(storage: S, limits: ScoreLimits) -> Self {
        Self {
            storage,
            limits,
            write_lock: Mutex::new(()),
        }
    }

    pub fn limits(&self) -> ScoreLimits {
        self.limits
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Full persisted collection, or the seed collection if nothing is stored
    pub async fn load(&self) -> WebServerResult<Vec<ScoreEntry>> {
        match self.storage.read_scores().await? {
            Some(scores) => Ok(scores),
            None => {
                app_debug!("Using default scores, {} is empty", self.storage.location());
                Ok(default_scores())
            }
        }
    }

    /// Highest `top_n` entries, best first
    pub async fn top(&self) -> WebServerResult<Vec<ScoreEntry>> {
        let scores = self.load().await?;
        Ok(top_n(scores, self.limits.top_n))
    }

    /// Record `entry`, re-rank, truncate to capacity and persist
    pub async fn submit(&self, entry: ScoreEntry) -> WebServerResult<Placement> {
        let _guard = self.write_lock.lock().await;

        let mut scores = self.load().await?;
        let summary = entry.to_string();
        let placement = insert_ranked(&mut scores, entry, self.limits.capacity);

        self.storage.write_scores(&scores).await?;

        match placement {
            Placement::Ranked(rank) => app_info!("🏆 New high score {} at rank {}", summary, rank),
            Placement::Unranked => app_info!("Score {} did not make the top {}", summary, self.limits.capacity),
        }

        Ok(placement)
    }
}
