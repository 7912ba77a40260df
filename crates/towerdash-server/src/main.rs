use tracing_subscriber::EnvFilter;

use towerdash_server::config::ServerConfig;
use towerdash_server::store::ScoreStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::load();
    config.validate();

    let store = match config.snapshot_path {
        Some(ref path) => match ScoreStore::load(std::path::Path::new(path)) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!("Cannot load snapshot {path}: {e}");
                std::process::exit(1);
            },
        },
        None => ScoreStore::new(),
    };

    let listen_addr = config.listen_addr.clone();
    let (app, _state) = towerdash_server::build_app(config, store);

    tracing::info!("Towerdash leaderboard server listening on {listen_addr}");
    let listener = match tokio::net::TcpListener::bind(&listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Cannot bind {listen_addr}: {e}");
            std::process::exit(1);
        },
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
