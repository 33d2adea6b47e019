//! High score leaderboard
//!
//! Keeps the top 10 named scores, best first. Storage is left to the host;
//! the board is serde-serializable.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score earns a place: always while the board has room,
    /// otherwise it must beat the lowest entry
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, name: impl Into<String>, score: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        let entry = HighScoreEntry {
            name: name.into(),
            score,
        };
        self.entries.insert(rank - 1, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        log::info!("New high score {score} at rank {rank}");
        Some(rank)
    }

    /// The best `count` entries
    pub fn top(&self, count: usize) -> &[HighScoreEntry] {
        &self.entries[..count.min(self.entries.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
