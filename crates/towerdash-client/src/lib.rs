//! Leaderboard client for Towerdash.
//!
//! Network I/O is fully decoupled from the game tick: requests spawn on
//! the runtime, results land in a channel, and the owner merges them at
//! tick boundaries via [`sync::LeaderboardSync::drain`].

pub mod api;
pub mod client;
pub mod sync;
pub mod view;

pub use api::{ListResponse, SubmitRequest, SubmitResponse};
pub use client::{ClientError, LeaderboardClient};
pub use sync::{LeaderboardMessage, LeaderboardSync};
pub use view::{LeaderboardView, ViewSource};
