use serde::{Deserialize, Serialize};

use towerdash_core::difficulty::Difficulty;
use towerdash_core::leaderboard::LeaderboardEntry;

/// Body of GET /api/leaderboard. Error bodies also parse into this shape
/// because the server always includes an `entries` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub entries: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of POST /api/submit-score.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    pub username: String,
    pub score: u32,
    pub difficulty: Difficulty,
}

/// Submission outcome. `success: false` with HTTP 200 means the stored
/// score was already at least as high.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub username: String,
    pub submitted_score: u32,
    pub current_score: u32,
    pub position: u32,
}
