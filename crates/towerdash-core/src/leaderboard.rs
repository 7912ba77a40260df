use serde::{Deserialize, Serialize};

/// Maximum username length after sanitization.
pub const MAX_USERNAME_LEN: usize = 50;

/// Maximum number of entries returned by a leaderboard listing.
pub const LEADERBOARD_CAP: usize = 25;

/// A single ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u32,
    /// 1-based rank in descending score order.
    pub position: u32,
}

/// Sanitize a raw username: trim whitespace, strip everything outside
/// `[A-Za-z0-9_-]`, cap at [`MAX_USERNAME_LEN`] chars.
///
/// Both the client (before submitting) and the server (independently, on
/// receipt) run this, so the stored key never depends on which side
/// validated. An empty result means the username is unusable.
pub fn sanitize_username(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(MAX_USERNAME_LEN)
        .collect()
}
