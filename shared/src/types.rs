//! Core score types shared across the workspace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Maximum number of characters kept from a submitted player name
pub const NAME_LENGTH: usize = 3;

/// Level recorded when a submission does not carry one
pub const DEFAULT_LEVEL: i64 = 1;

/// Difficulty recorded when a submission does not carry one
pub const DEFAULT_DIFFICULTY: &str = "normal";

fn default_level() -> i64 {
    DEFAULT_LEVEL
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

/// A single recorded high score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

impl ScoreEntry {
    /// Create an entry with a normalized name and default level/difficulty
    pub fn new(name: impl AsRef<str>, score: i64) -> Self {
        Self {
            name: normalize_name(name.as_ref()),
            score,
            level: DEFAULT_LEVEL,
            difficulty: default_difficulty(),
        }
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (level {}, {})",
            self.name, self.score, self.level, self.difficulty
        )
    }
}

/// Keep the first three characters of a name, uppercased
///
/// Uppercasing can expand a character (`ß` becomes `SS`), so the limit is
/// applied again afterwards.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .take(NAME_LENGTH)
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(NAME_LENGTH)
        .collect()
}

/// Score as it arrives from a client, before integer coercion
///
/// Clients send numbers, floats or numeric strings depending on how the game
/// tracked the value. All of them collapse to an integer score. Any other JSON
/// value (`null`, booleans, arrays, objects) is kept as `Other` so it can be
/// rejected as an invalid score rather than as a malformed body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl ScoreValue {
    /// Coerce to an integer score, truncating floats toward zero
    pub fn to_score(&self) -> SharedResult<i64> {
        match self {
            ScoreValue::Integer(value) => Ok(*value),
            ScoreValue::Float(value) => {
                let truncated = value.trunc();
                // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated < i64::MAX as f64
                {
                    Ok(truncated as i64)
                } else {
                    Err(SharedError::InvalidScore {
                        value: value.to_string(),
                    })
                }
            }
            ScoreValue::Text(text) => {
                text.trim()
                    .parse::<i64>()
                    .map_err(|_| SharedError::InvalidScore {
                        value: text.clone(),
                    })
            }
            ScoreValue::Other(value) => Err(SharedError::InvalidScore {
                value: value.to_string(),
            }),
        }
    }
}

impl From<i64> for ScoreValue {
    fn from(value: i64) -> Self {
        ScoreValue::Integer(value)
    }
}

/// Seed collection used until the first submission is persisted
pub fn default_scores() -> Vec<ScoreEntry> {
    vec![
        ScoreEntry::new("ACE", 10000).with_level(12).with_difficulty("hard"),
        ScoreEntry::new("MAX", 8500).with_level(10).with_difficulty("hard"),
        ScoreEntry::new("ZAP", 7200).with_level(8),
        ScoreEntry::new("NEO", 6000).with_level(6),
        ScoreEntry::new("REX", 4500).with_level(4).with_difficulty("easy"),
    ]
}
