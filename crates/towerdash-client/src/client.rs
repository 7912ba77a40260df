use towerdash_core::difficulty::Difficulty;
use towerdash_core::leaderboard::{LeaderboardEntry, sanitize_username};

use crate::api::{ListResponse, SubmitRequest, SubmitResponse};

#[derive(Debug)]
pub enum ClientError {
    /// Username had no valid characters after sanitization; never sent.
    InvalidUsername,
    /// Connection-level failure: DNS, refused, timeout.
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Backend { status: u16, message: String },
    /// A success status carried a body we could not decode.
    Decode(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUsername => write!(f, "username has no valid characters"),
            Self::Transport(e) => write!(f, "transport error: {e}"),
            Self::Backend { status, message } => write!(f, "server error {status}: {message}"),
            Self::Decode(m) => write!(f, "bad response body: {m}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// HTTP client for the leaderboard API.
///
/// Reads are expected to degrade: callers turn any error into placeholder
/// rows. Writes surface the server's message verbatim to the player.
pub struct LeaderboardClient {
    base_url: String,
    http: reqwest::Client,
}

impl LeaderboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("towerdash/0.1")
            .build()
            .expect("Failed to create HTTP client");
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// GET /api/leaderboard for one difficulty.
    pub async fn fetch(&self, difficulty: Difficulty) -> Result<Vec<LeaderboardEntry>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/leaderboard", self.base_url))
            .query(&[("difficulty", difficulty.as_str())])
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Backend {
                status: status.as_u16(),
                message: error_message(resp).await,
            });
        }

        let body: ListResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(body.entries)
    }

    /// POST /api/submit-score. The username is sanitized locally first;
    /// an unusable one fails without touching the network.
    pub async fn submit(
        &self,
        username: &str,
        score: u32,
        difficulty: Difficulty,
    ) -> Result<SubmitResponse, ClientError> {
        let username = sanitize_username(username);
        if username.is_empty() {
            return Err(ClientError::InvalidUsername);
        }

        let resp = self
            .http
            .post(format!("{}/api/submit-score", self.base_url))
            .json(&SubmitRequest {
                username,
                score,
                difficulty,
            })
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Backend {
                status: status.as_u16(),
                message: error_message(resp).await,
            });
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Pull the `error` field out of a failure body; non-JSON bodies (proxies,
/// wrong paths) degrade to a generic message.
async fn error_message(resp: reqwest::Response) -> String {
    match resp.json::<serde_json::Value>().await {
        Ok(body) => body["error"].as_str().unwrap_or("unknown error").to_string(),
        Err(_) => "unknown error".to_string(),
    }
}
