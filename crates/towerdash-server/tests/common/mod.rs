use std::net::SocketAddr;
use std::time::Duration;

use towerdash_server::build_app;
use towerdash_server::config::ServerConfig;
use towerdash_server::store::ScoreStore;

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server on an ephemeral port with an empty store.
    pub async fn new() -> Self {
        Self::from_config(ServerConfig::default()).await
    }

    pub async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config, ScoreStore::new());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Submit a score and return the parsed response body.
pub async fn submit(
    client: &reqwest::Client,
    base: &str,
    username: &str,
    score: u32,
    difficulty: &str,
) -> serde_json::Value {
    client
        .post(format!("{base}/api/submit-score"))
        .json(&serde_json::json!({
            "username": username,
            "score": score,
            "difficulty": difficulty,
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

/// Fetch the leaderboard entries for a difficulty.
pub async fn entries(
    client: &reqwest::Client,
    base: &str,
    difficulty: &str,
) -> Vec<serde_json::Value> {
    let body: serde_json::Value = client
        .get(format!("{base}/api/leaderboard?difficulty={difficulty}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body["entries"].as_array().unwrap().clone()
}
