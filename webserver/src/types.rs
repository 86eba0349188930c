//! Request and response bodies for the high score API

use serde::{Deserialize, Serialize};
use shared::{DEFAULT_DIFFICULTY, DEFAULT_LEVEL, ScoreEntry, ScoreValue, SharedResult};

/// Body of `POST /api/highscores`
///
/// `name` and `score` are required; a body missing either fails to
/// deserialize and is rejected before reaching the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub name: String,
    pub score: ScoreValue,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl SubmitRequest {
    pub fn new(name: impl Into<String>, score: impl Into<ScoreValue>) -> Self {
        Self {
            name: name.into(),
            score: score.into(),
            level: None,
            difficulty: None,
        }
    }

    /// Normalize into the entry that gets stored
    pub fn into_entry(self) -> SharedResult<ScoreEntry> {
        let score = self.score.to_score()?;

        Ok(ScoreEntry::new(&self.name, score)
            .with_level(self.level.unwrap_or(DEFAULT_LEVEL))
            .with_difficulty(self.difficulty.unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string())))
    }
}

/// Body returned for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    /// `None` when the entry did not make the retained leaderboard
    pub rank: Option<usize>,
}

/// Body returned for any rejected request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
