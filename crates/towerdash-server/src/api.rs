use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use towerdash_core::difficulty::Difficulty;
use towerdash_core::leaderboard::{LeaderboardEntry, sanitize_username};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub difficulty: Option<String>,
}

/// Response for a leaderboard listing.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub difficulty: Difficulty,
    pub entries: Vec<LeaderboardEntry>,
}

/// Request body for a score submission.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub username: String,
    /// Non-negative by construction; negative JSON numbers fail to parse.
    pub score: u32,
    pub difficulty: Option<String>,
}

/// Response for a score submission. `success: false` still travels as
/// HTTP 200: a lower score is a normal outcome, not an error.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub username: String,
    pub submitted_score: u32,
    pub current_score: u32,
    pub position: u32,
}

/// Missing difficulty defaults to medium; an unknown string is a 400.
fn parse_difficulty(raw: Option<&str>) -> Result<Difficulty, AppError> {
    match raw {
        None => Ok(Difficulty::default()),
        Some(s) => s
            .parse()
            .map_err(|e: towerdash_core::difficulty::InvalidDifficulty| {
                AppError::BadRequest(e.to_string())
            }),
    }
}

/// GET /api/leaderboard: ranked entries for one difficulty.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<ListResponse>, AppError> {
    let difficulty = parse_difficulty(query.difficulty.as_deref())?;
    let store = state.store.read().await;
    let entries = store.list(difficulty, state.config.limits.leaderboard_cap);
    Ok(Json(ListResponse {
        difficulty,
        entries,
    }))
}

/// POST /api/submit-score: keep-only-the-max submission.
///
/// The username is re-sanitized here regardless of what the client did;
/// the stored key never depends on which side validated.
pub async fn submit_score(
    State(state): State<AppState>,
    Json(body): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let username = sanitize_username(&body.username);
    if username.is_empty() {
        return Err(AppError::BadRequest(
            "username has no valid characters".to_string(),
        ));
    }
    let difficulty = parse_difficulty(body.difficulty.as_deref())?;

    let outcome = {
        let mut store = state.store.write().await;
        let outcome = store.submit(difficulty, &username, body.score);
        // Persist while still holding the write lock so snapshots never
        // interleave between two submissions.
        if outcome.accepted
            && let Some(ref path) = state.config.snapshot_path
            && let Err(e) = store.save(std::path::Path::new(path))
        {
            tracing::warn!("Failed to write snapshot {path}: {e}");
        }
        outcome
    };

    let message = if outcome.accepted {
        format!("New best score for {username}: {}", outcome.current_score)
    } else {
        format!(
            "Score {} does not beat the recorded {}",
            body.score, outcome.current_score
        )
    };
    tracing::info!(
        user = %username,
        difficulty = %difficulty,
        score = body.score,
        accepted = outcome.accepted,
        "score submission"
    );

    Ok(Json(SubmitResponse {
        success: outcome.accepted,
        message,
        username,
        submitted_score: body.score,
        current_score: outcome.current_score,
        position: outcome.position,
    }))
}
