pub mod difficulty;
pub mod leaderboard;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::leaderboard::LeaderboardEntry;

    /// Build a ranked entry list from `(username, score)` pairs, assigning
    /// 1-based positions in the given order.
    pub fn make_entries(pairs: &[(&str, u32)]) -> Vec<LeaderboardEntry> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(username, score))| LeaderboardEntry {
                username: username.to_string(),
                score,
                position: i as u32 + 1,
            })
            .collect()
    }
}
