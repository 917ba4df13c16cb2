//! Axum route handlers for direct access to the track recommender.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::recommendation::classifier::{recommend, Recommendation, DEFAULT_COURSES};
use crate::recommendation::tracks::Track;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub skills: Vec<String>,
    /// Clamped into 1..=10; defaults to 4.
    pub course_count: Option<i64>,
}

/// POST /api/v1/recommendations
///
/// Recommends a track and a course sample for an arbitrary skill list.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Recommendation>, AppError> {
    let requested = request.course_count.unwrap_or(DEFAULT_COURSES as i64);
    let recommendation = recommend(
        &request.skills,
        state.tracks.tracks(),
        requested,
        &mut rand::thread_rng(),
    );
    Ok(Json(recommendation))
}

/// GET /api/v1/tracks
pub async fn handle_list_tracks(State(state): State<AppState>) -> Json<Vec<Track>> {
    Json(state.tracks.tracks().to_vec())
}
