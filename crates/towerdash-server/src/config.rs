use serde::Deserialize;

use towerdash_core::leaderboard::{LEADERBOARD_CAP, MAX_USERNAME_LEN};

/// Top-level server configuration, loaded from `towerdash.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// JSON snapshot file for leaderboard persistence. None disables
    /// persistence entirely.
    pub snapshot_path: Option<String>,
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            snapshot_path: None,
            limits: LimitsConfig::default(),
        }
    }
}

/// Leaderboard limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum entries returned by a listing.
    pub leaderboard_cap: usize,
    pub max_username_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            leaderboard_cap: LEADERBOARD_CAP,
            max_username_len: MAX_USERNAME_LEN,
        }
    }
}

impl ServerConfig {
    /// Validate configuration, exiting on unrecoverable problems.
    pub fn validate(&self) {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            tracing::error!(
                addr = %self.listen_addr,
                "listen_addr is not a valid socket address"
            );
            std::process::exit(1);
        }
        if self.limits.leaderboard_cap == 0 {
            tracing::error!("limits.leaderboard_cap must be > 0");
            std::process::exit(1);
        }
        if self.limits.max_username_len == 0 {
            tracing::error!("limits.max_username_len must be > 0");
            std::process::exit(1);
        }
    }

    /// Load config from `towerdash.toml` (or `TOWERDASH_CONFIG`) if it
    /// exists, then apply env var overrides.
    pub fn load() -> Self {
        let path = std::env::var("TOWERDASH_CONFIG").unwrap_or_else(|_| "towerdash.toml".to_string());
        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from {path}");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No {path} found, using defaults");
                ServerConfig::default()
            },
        };

        if let Ok(addr) = std::env::var("TOWERDASH_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(snapshot) = std::env::var("TOWERDASH_SNAPSHOT_PATH")
            && !snapshot.is_empty()
        {
            config.snapshot_path = Some(snapshot);
        }
        if let Ok(val) = std::env::var("TOWERDASH_LEADERBOARD_CAP")
            && let Ok(n) = val.parse::<usize>()
        {
            config.limits.leaderboard_cap = n;
        }

        config
    }
}
