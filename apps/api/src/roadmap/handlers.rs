use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::roadmap::{generate_roadmap, Roadmap};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRoadmapRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// POST /api/v1/roadmap/generate
///
/// Builds the baseline plan. With a `user_id`, the plan and goal replace the
/// ones stored on that user's session.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(req): Json<GenerateRoadmapRequest>,
) -> Result<Json<Roadmap>, AppError> {
    let skills: Vec<String> = req
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    let roadmap = generate_roadmap(&skills, &req.goal);

    if let Some(user_id) = req.user_id.as_deref().filter(|id| !id.trim().is_empty()) {
        let mut session = state.store.checkout(user_id).await;
        session.roadmap = roadmap.clone();
        session.roadmap_goal = req.goal.clone();
        session.touch();
        info!("Stored {}-week roadmap for user {user_id}", roadmap.len());
    }

    Ok(Json(roadmap))
}
