use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use towerdash_core::difficulty::Difficulty;
use towerdash_core::leaderboard::LeaderboardEntry;

/// Result of a score submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// True when the submitted score replaced the stored one.
    pub accepted: bool,
    /// The score on record after the submission.
    pub current_score: u32,
    /// 1-based rank of the username after the submission.
    pub position: u32,
}

/// Errors from snapshot persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Snapshot path is configured but cannot be read or parsed.
    BackendUnavailable(String),
    Io(std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BackendUnavailable(m) => write!(f, "score backend unavailable: {m}"),
            Self::Io(e) => write!(f, "snapshot io error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// In-memory leaderboard keyed per difficulty, one entry per username.
///
/// BTreeMap keeps usernames in ascending order, which combined with a
/// stable sort gives deterministic tie ordering in listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreStore {
    boards: BTreeMap<Difficulty, BTreeMap<String, u32>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomic keep-only-the-max check-and-set. A strictly greater score
    /// replaces the stored one; an equal or lower score leaves the board
    /// untouched. Either way the caller learns the score on record and the
    /// username's rank after the call.
    pub fn submit(&mut self, difficulty: Difficulty, username: &str, score: u32) -> SubmitOutcome {
        let board = self.boards.entry(difficulty).or_default();
        let accepted = match board.get(username) {
            Some(&existing) if existing >= score => false,
            _ => {
                board.insert(username.to_string(), score);
                true
            },
        };
        let current_score = board[username];
        let position = self
            .position_of(difficulty, username)
            .unwrap_or(u32::MAX);
        SubmitOutcome {
            accepted,
            current_score,
            position,
        }
    }

    /// Ranked listing for one difficulty: score descending, ties in
    /// username order, 1-based positions, capped at `cap` entries.
    pub fn list(&self, difficulty: Difficulty, cap: usize) -> Vec<LeaderboardEntry> {
        self.ranked(difficulty)
            .take(cap)
            .enumerate()
            .map(|(i, (username, score))| LeaderboardEntry {
                username,
                score,
                position: i as u32 + 1,
            })
            .collect()
    }

    /// Rank of one username over the full (uncapped) board.
    pub fn position_of(&self, difficulty: Difficulty, username: &str) -> Option<u32> {
        self.ranked(difficulty)
            .position(|(name, _)| name == username)
            .map(|i| i as u32 + 1)
    }

    fn ranked(&self, difficulty: Difficulty) -> impl Iterator<Item = (String, u32)> {
        let mut rows: Vec<(String, u32)> = self
            .boards
            .get(&difficulty)
            .map(|board| board.iter().map(|(n, &s)| (n.clone(), s)).collect())
            .unwrap_or_default();
        // Stable sort preserves the BTreeMap's username order on ties.
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows.into_iter()
    }

    /// Load a snapshot. An absent file is an empty store; an unreadable or
    /// unparseable file means the backend cannot be trusted.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| StoreError::BackendUnavailable(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(StoreError::BackendUnavailable(format!(
                "{}: {e}",
                path.display()
            ))),
        }
    }

    /// Write the snapshot atomically via a sibling temp file.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::BackendUnavailable(e.to_string()))?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}
