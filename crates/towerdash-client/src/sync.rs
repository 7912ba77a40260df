use std::sync::Arc;

use tokio::sync::mpsc;

use towerdash_core::difficulty::Difficulty;
use towerdash_core::leaderboard::LeaderboardEntry;

use crate::api::SubmitResponse;
use crate::client::{ClientError, LeaderboardClient};
use crate::view::LeaderboardView;

/// Completed network work, delivered through the channel.
#[derive(Debug)]
pub enum LeaderboardMessage {
    Fetched {
        generation: u64,
        difficulty: Difficulty,
        result: Result<Vec<LeaderboardEntry>, ClientError>,
    },
    Submitted {
        generation: u64,
        result: Result<SubmitResponse, ClientError>,
    },
}

/// Bridges async leaderboard I/O into a synchronous tick loop.
///
/// Requests spawn tasks immediately; results queue in an unbounded channel
/// and apply to the view only when the owner calls [`drain`](Self::drain),
/// so the simulation never observes a mid-tick mutation. Results tagged
/// with a stale generation are dropped: bump the generation when leaving
/// the screen that asked for them.
pub struct LeaderboardSync {
    client: Arc<LeaderboardClient>,
    tx: mpsc::UnboundedSender<LeaderboardMessage>,
    rx: mpsc::UnboundedReceiver<LeaderboardMessage>,
    generation: u64,
}

impl LeaderboardSync {
    pub fn new(client: LeaderboardClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            tx,
            rx,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidate all in-flight requests.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Kick off a leaderboard fetch.
    pub fn request_fetch(&self, difficulty: Difficulty) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let result = client.fetch(difficulty).await;
            let _ = tx.send(LeaderboardMessage::Fetched {
                generation,
                difficulty,
                result,
            });
        });
    }

    /// Kick off a score submission.
    pub fn request_submit(&self, username: String, score: u32, difficulty: Difficulty) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let result = client.submit(&username, score, difficulty).await;
            let _ = tx.send(LeaderboardMessage::Submitted { generation, result });
        });
    }

    /// Apply every queued result to the view. Called once per tick by the
    /// owner; never blocks.
    pub fn drain(&mut self, view: &mut LeaderboardView, now_ms: u64) {
        while let Ok(msg) = self.rx.try_recv() {
            self.apply(msg, view, now_ms);
        }
    }

    fn apply(&self, msg: LeaderboardMessage, view: &mut LeaderboardView, now_ms: u64) {
        match msg {
            LeaderboardMessage::Fetched {
                generation, result, ..
            } => {
                if generation != self.generation {
                    return;
                }
                match result {
                    Ok(entries) => view.set_entries(entries),
                    Err(e) => {
                        tracing::debug!("Leaderboard fetch failed: {e}");
                        view.set_unavailable();
                    },
                }
            },
            LeaderboardMessage::Submitted { generation, result } => {
                if generation != self.generation {
                    return;
                }
                match result {
                    Ok(resp) => view.record_submit(&resp, now_ms),
                    Err(e) => view.record_submit_failure(e.to_string(), now_ms),
                }
            },
        }
    }

    /// [`drain`](Self::drain) with the wall clock as the tick timestamp.
    pub fn drain_now(&mut self, view: &mut LeaderboardView) {
        self.drain(view, towerdash_core::time::now_millis());
    }

    /// Sender half, for tests that inject results without a network.
    #[doc(hidden)]
    pub fn sender(&self) -> mpsc::UnboundedSender<LeaderboardMessage> {
        self.tx.clone()
    }
}
