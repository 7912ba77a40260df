use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::store::ScoreStore;

pub type SharedScoreStore = Arc<RwLock<ScoreStore>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedScoreStore,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, store: ScoreStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}
