//! Ranking rules for score collections
//!
//! Collections are ordered by descending score. Sorting is stable, so entries
//! with equal scores keep their storage order and a newly inserted entry is
//! placed after every existing entry with the same score.

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::types::ScoreEntry;

/// Number of entries kept in storage after a submission
pub const DEFAULT_CAPACITY: usize = 20;

/// Number of entries returned when listing the leaderboard
pub const DEFAULT_TOP_N: usize = 10;

/// Size bounds applied to a score collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLimits {
    pub capacity: usize,
    pub top_n: usize,
}

impl ScoreLimits {
    pub fn new(capacity: usize, top_n: usize) -> SharedResult<Self> {
        if top_n > capacity {
            return Err(SharedError::InvalidConfig {
                field: "top".to_string(),
                value: format!("{top_n} exceeds capacity {capacity}"),
            });
        }
        Ok(Self { capacity, top_n })
    }
}

impl Default for ScoreLimits {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Where a submitted entry ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// 1-based position in the truncated collection
    Ranked(usize),
    /// Entry scored below the retained capacity and was discarded
    Unranked,
}

impl Placement {
    pub fn rank(&self) -> Option<usize> {
        match self {
            Placement::Ranked(rank) => Some(*rank),
            Placement::Unranked => None,
        }
    }
}

/// Stable sort, highest score first
pub fn sort_by_score(entries: &mut [ScoreEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

/// The `n` highest scoring entries
pub fn top_n(mut entries: Vec<ScoreEntry>, n: usize) -> Vec<ScoreEntry> {
    sort_by_score(&mut entries);
    entries.truncate(n);
    entries
}

/// Insert `entry`, re-rank and truncate to `capacity`
///
/// Equivalent to appending the entry and stable-sorting the whole collection,
/// but the new entry's position is known without searching for it afterwards.
pub fn insert_ranked(entries: &mut Vec<ScoreEntry>, entry: ScoreEntry, capacity: usize) -> Placement {
    sort_by_score(entries);

    let position = entries.partition_point(|existing| existing.score >= entry.score);
    entries.insert(position, entry);
    entries.truncate(capacity);

    if position < capacity {
        Placement::Ranked(position + 1)
    } else {
        Placement::Unranked
    }
}
