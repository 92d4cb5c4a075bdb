//! High score leaderboard
//!
//! Session-only: scores live as long as the shooter process.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    /// Wave reached
    pub wave: u32,
}

/// Top scores, sorted descending
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Must beat the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a score if it qualifies; returns the 1-indexed rank achieved
    ///
    /// Ties rank below existing entries with the same score.
    pub fn add_score(&mut self, score: u32, wave: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, wave };
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(pos + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(0, 1), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_sorted_descending_with_ranks() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(50, 1), Some(1));
        assert_eq!(scores.add_score(100, 2), Some(1));
        assert_eq!(scores.add_score(70, 1), Some(2));
        assert_eq!(scores.add_score(70, 3), Some(3));

        let values: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![100, 70, 70, 50]);
        assert_eq!(scores.top_score(), Some(100));
    }

    #[test]
    fn test_capped_at_ten() {
        let mut scores = HighScores::new();
        for i in 1..=10 {
            scores.add_score(i * 10, 1);
        }
        assert!(!scores.qualifies(10));
        assert_eq!(scores.add_score(5, 1), None);
        assert_eq!(scores.add_score(15, 1), Some(10));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(15));
    }
}
