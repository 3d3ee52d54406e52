use axum::{extract::State, Json};
use serde::Serialize;

use super::players::PlayerResponse;
use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::domain::shuffle::{TeamSheet, TeamSplit};

/// One team in a shuffle response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub players: Vec<PlayerResponse>,
    pub total_points: u32,
    pub formation: String,
}

impl From<&TeamSheet> for TeamResponse {
    fn from(sheet: &TeamSheet) -> Self {
        Self {
            players: sheet.players().iter().map(PlayerResponse::from).collect(),
            total_points: sheet.total_points(),
            formation: sheet.formation().to_string(),
        }
    }
}

/// Response from a shuffle
#[derive(Debug, Serialize)]
pub struct ShuffleResponse {
    pub team1: TeamResponse,
    pub team2: TeamResponse,
}

impl From<&TeamSplit> for ShuffleResponse {
    fn from(split: &TeamSplit) -> Self {
        Self {
            team1: TeamResponse::from(&split.team1),
            team2: TeamResponse::from(&split.team2),
        }
    }
}

/// Shuffle the whole roster into two teams
///
/// POST /api/shuffle
pub async fn shuffle_teams(
    State(state): State<AppState>,
) -> Result<Json<ShuffleResponse>, ApiError> {
    let split = state.shuffle_service().shuffle_roster().await?;

    Ok(Json(ShuffleResponse::from(&split)))
}

/// Shuffle the sixteen players with the given IDs
///
/// IDs arrive as plain strings so that malformed ones are reported as
/// missing players rather than rejected by the body parser.
///
/// POST /api/shuffle/custom
pub async fn shuffle_custom(
    State(state): State<AppState>,
    ApiJson(player_ids): ApiJson<Vec<String>>,
) -> Result<Json<ShuffleResponse>, ApiError> {
    let split = state.shuffle_service().shuffle_selection(&player_ids).await?;

    Ok(Json(ShuffleResponse::from(&split)))
}
