use towerdash_core::leaderboard::LeaderboardEntry;

use crate::api::SubmitResponse;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// How long submit feedback stays on screen.
pub const FEEDBACK_DURATION_MS: u64 = 3000;

/// Where the currently displayed rows came from. The rendered fallback is
/// identical for `Empty` and `Unavailable`; the distinction is kept so a
/// caller that wants to say "offline" instead of "no scores yet" can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSource {
    Live,
    Empty,
    Unavailable,
}

/// Transient message after a submission.
#[derive(Debug, Clone)]
struct Feedback {
    message: String,
    success: bool,
    expires_at_ms: u64,
}

/// Display-side reconciliation of leaderboard state.
///
/// Mutated only from `LeaderboardSync::drain` and the owner's input
/// handling, never from async tasks directly.
#[derive(Debug, Clone)]
pub struct LeaderboardView {
    entries: Vec<LeaderboardEntry>,
    source: ViewSource,
    page_start: usize,
    remembered_username: Option<String>,
    feedback: Option<Feedback>,
}

impl Default for LeaderboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardView {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            source: ViewSource::Empty,
            page_start: 0,
            remembered_username: None,
            feedback: None,
        }
    }

    pub fn source(&self) -> ViewSource {
        self.source
    }

    /// Apply a successful fetch.
    pub fn set_entries(&mut self, entries: Vec<LeaderboardEntry>) {
        self.source = if entries.is_empty() {
            ViewSource::Empty
        } else {
            ViewSource::Live
        };
        self.entries = entries;
        self.page_start = 0;
    }

    /// Apply a failed fetch. Rows fall back to placeholders.
    pub fn set_unavailable(&mut self) {
        self.entries.clear();
        self.source = ViewSource::Unavailable;
        self.page_start = 0;
    }

    /// The rows to render: a full page of placeholders when nothing live
    /// is available, otherwise a window of up to [`PAGE_SIZE`] entries.
    pub fn visible_rows(&self) -> Vec<LeaderboardEntry> {
        if self.entries.is_empty() {
            return placeholder_rows();
        }
        self.entries
            .iter()
            .skip(self.page_start)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    /// Advance to the next page, wrapping to the first past the end.
    /// With one page or fewer this is a no-op.
    pub fn advance_page(&mut self) {
        if self.entries.len() <= PAGE_SIZE {
            return;
        }
        self.page_start += PAGE_SIZE;
        if self.page_start >= self.entries.len() {
            self.page_start = 0;
        }
    }

    /// Apply a submission response: remember an accepted username for
    /// prefill and show the server's message for a few seconds.
    pub fn record_submit(&mut self, resp: &SubmitResponse, now_ms: u64) {
        if resp.success {
            self.remembered_username = Some(resp.username.clone());
        }
        self.feedback = Some(Feedback {
            message: resp.message.clone(),
            success: resp.success,
            expires_at_ms: now_ms + FEEDBACK_DURATION_MS,
        });
    }

    /// Show a failure message (transport errors and the like).
    pub fn record_submit_failure(&mut self, message: String, now_ms: u64) {
        self.feedback = Some(Feedback {
            message,
            success: false,
            expires_at_ms: now_ms + FEEDBACK_DURATION_MS,
        });
    }

    /// Current feedback, if it has not expired: (message, success).
    pub fn feedback(&self, now_ms: u64) -> Option<(&str, bool)> {
        self.feedback
            .as_ref()
            .filter(|f| now_ms < f.expires_at_ms)
            .map(|f| (f.message.as_str(), f.success))
    }

    /// Last username the server accepted, for prefilling the entry form.
    pub fn prefill_username(&self) -> Option<&str> {
        self.remembered_username.as_deref()
    }
}

/// Deterministic placeholder page: dashes, zero scores, ranks 1 to 10.
fn placeholder_rows() -> Vec<LeaderboardEntry> {
    (1..=PAGE_SIZE as u32)
        .map(|position| LeaderboardEntry {
            username: "---".to_string(),
            score: 0,
            position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use towerdash_core::test_helpers::make_entries;

    fn submit_response(success: bool, username: &str) -> SubmitResponse {
        SubmitResponse {
            success,
            message: if success { "saved" } else { "not saved" }.to_string(),
            username: username.to_string(),
            submitted_score: 10,
            current_score: 10,
            position: 1,
        }
    }

    #[test]
    fn empty_view_shows_a_full_placeholder_page() {
        let view = LeaderboardView::new();
        let rows = view.visible_rows();
        assert_eq!(rows.len(), PAGE_SIZE);
        assert!(rows.iter().all(|r| r.username == "---" && r.score == 0));
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[9].position, 10);
    }

    #[test]
    fn unavailable_renders_identically_to_empty() {
        let mut unavailable = LeaderboardView::new();
        unavailable.set_unavailable();
        let empty = LeaderboardView::new();
        assert_eq!(empty.visible_rows(), unavailable.visible_rows());
        // The source still tells them apart.
        assert_eq!(empty.source(), ViewSource::Empty);
        assert_eq!(unavailable.source(), ViewSource::Unavailable);
    }

    #[test]
    fn live_entries_replace_placeholders() {
        let mut view = LeaderboardView::new();
        view.set_entries(make_entries(&[("alice", 50), ("bob", 30)]));
        assert_eq!(view.source(), ViewSource::Live);
        let rows = view.visible_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].username, "alice");
    }

    #[test]
    fn pager_windows_and_wraps() {
        let mut view = LeaderboardView::new();
        let all: Vec<(String, u32)> = (0..25u32)
            .map(|i| (format!("p{i:02}"), 100 - i))
            .collect();
        let refs: Vec<(&str, u32)> = all.iter().map(|(n, s)| (n.as_str(), *s)).collect();
        view.set_entries(make_entries(&refs));

        assert_eq!(view.visible_rows()[0].username, "p00");
        view.advance_page();
        assert_eq!(view.visible_rows()[0].username, "p10");
        view.advance_page();
        assert_eq!(view.visible_rows().len(), 5, "last partial page");
        view.advance_page();
        assert_eq!(view.visible_rows()[0].username, "p00", "wraps around");
    }

    #[test]
    fn single_page_never_advances() {
        let mut view = LeaderboardView::new();
        view.set_entries(make_entries(&[("alice", 50)]));
        view.advance_page();
        assert_eq!(view.visible_rows()[0].username, "alice");
    }

    #[test]
    fn accepted_submission_is_remembered_for_prefill() {
        let mut view = LeaderboardView::new();
        view.record_submit(&submit_response(true, "alice"), 0);
        assert_eq!(view.prefill_username(), Some("alice"));

        view.record_submit(&submit_response(false, "bob"), 0);
        assert_eq!(view.prefill_username(), Some("alice"), "rejections do not overwrite");
    }

    #[test]
    fn feedback_expires() {
        let mut view = LeaderboardView::new();
        view.record_submit(&submit_response(true, "alice"), 1000);
        assert_eq!(view.feedback(1000), Some(("saved", true)));
        assert_eq!(view.feedback(1000 + FEEDBACK_DURATION_MS - 1), Some(("saved", true)));
        assert_eq!(view.feedback(1000 + FEEDBACK_DURATION_MS), None);
    }

    #[test]
    fn fresh_fetch_resets_the_pager() {
        let mut view = LeaderboardView::new();
        let all: Vec<(String, u32)> = (0..15u32).map(|i| (format!("p{i}"), 50)).collect();
        let refs: Vec<(&str, u32)> = all.iter().map(|(n, s)| (n.as_str(), *s)).collect();
        view.set_entries(make_entries(&refs));
        view.advance_page();
        view.set_entries(make_entries(&[("alice", 99)]));
        assert_eq!(view.visible_rows()[0].username, "alice");
    }
}
