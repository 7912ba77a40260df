pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod store;

use axum::Router;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

use config::ServerConfig;
use state::AppState;
use store::ScoreStore;

/// Build the Axum router and application state from a config and an
/// already-loaded score store.
pub fn build_app(config: ServerConfig, store: ScoreStore) -> (Router<()>, AppState) {
    let state = AppState::new(config, store);

    // The game runs in browsers served from anywhere; the API is public.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/leaderboard", axum::routing::get(api::get_leaderboard))
        .route("/api/submit-score", axum::routing::post(api::submit_score))
        .layer(cors)
        .with_state(state.clone());

    (app, state)
}
