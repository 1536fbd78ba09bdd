//! Session leaderboard
//!
//! Keeps the best runs of the current process in memory. Scores are never
//! written to disk.

use serde::Serialize;

use crate::game::RunSummary;

/// Maximum number of runs to keep
pub const MAX_ENTRIES: usize = 10;

/// One finished run on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub score: u32,
    /// Run number within the session (1-based)
    pub run: u32,
    /// Seed the run was played with, enough to replay it
    pub seed: u64,
    /// Ticks the run lasted
    pub ticks: u64,
}

impl From<&RunSummary> for ScoreEntry {
    fn from(summary: &RunSummary) -> Self {
        Self {
            score: summary.score,
            run: summary.run,
            seed: summary.seed,
            ticks: summary.ticks,
        }
    }
}

/// Leaderboard sorted by descending score, earlier runs first on ties
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// 1-based rank a new run with `score` would take, if it makes the board
    pub fn rank_for(&self, score: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let slot = self.entries.partition_point(|e| e.score >= score);
        (slot < MAX_ENTRIES).then_some(slot + 1)
    }

    /// Insert a finished run, dropping whatever falls off the bottom
    pub fn record(&mut self, entry: ScoreEntry) -> Option<usize> {
        let rank = self.rank_for(entry.score)?;
        self.entries.insert(rank - 1, entry);
        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
