use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::domain::player::{
    Player, PlayerChanges, PlayerDraft, PlayerSkills, Position, PreferredFoot,
};
use crate::domain::repositories::RepositoryError;

/// Request body for creating a player
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: String,
    pub position: Position,
    pub points: u8,
    pub photo: String,
    pub skills: PlayerSkills,
    pub age: u8,
    pub preferred_foot: PreferredFoot,
    pub nationality: String,
    #[serde(default)]
    pub is_subscribed: bool,
}

impl From<CreatePlayerRequest> for PlayerDraft {
    fn from(req: CreatePlayerRequest) -> Self {
        Self {
            name: req.name,
            position: req.position,
            points: req.points,
            photo: req.photo,
            skills: req.skills,
            age: req.age,
            preferred_foot: req.preferred_foot,
            nationality: req.nationality,
            is_subscribed: req.is_subscribed,
        }
    }
}

/// Request body for updating a player; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    pub name: Option<String>,
    pub position: Option<Position>,
    pub points: Option<u8>,
    pub photo: Option<String>,
    pub skills: Option<PlayerSkills>,
    pub age: Option<u8>,
    pub preferred_foot: Option<PreferredFoot>,
    pub nationality: Option<String>,
    pub is_subscribed: Option<bool>,
}

impl From<UpdatePlayerRequest> for PlayerChanges {
    fn from(req: UpdatePlayerRequest) -> Self {
        Self {
            name: req.name,
            position: req.position,
            points: req.points,
            photo: req.photo,
            skills: req.skills,
            age: req.age,
            preferred_foot: req.preferred_foot,
            nationality: req.nationality,
            is_subscribed: req.is_subscribed,
        }
    }
}

/// Player as returned by the API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: Uuid,
    pub name: String,
    pub position: Position,
    pub points: u8,
    pub photo: String,
    pub skills: PlayerSkills,
    pub age: u8,
    pub preferred_foot: PreferredFoot,
    pub nationality: String,
    pub is_subscribed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            position: player.position(),
            points: player.points(),
            photo: player.photo().to_string(),
            skills: player.skills(),
            age: player.age(),
            preferred_foot: player.preferred_foot(),
            nationality: player.nationality().to_string(),
            is_subscribed: player.is_subscribed(),
            created_at: player.created_at(),
            updated_at: player.updated_at(),
        }
    }
}

/// Outcome of a bulk import
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub created: usize,
    pub errors: Vec<String>,
    pub players: Vec<PlayerResponse>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parses a player ID from the URL; an ID that is not a UUID names no player
fn parse_player_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(format!("Player not found: {}", raw)))
}

/// List all players
///
/// GET /api/players
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let players = state.players.find_all().await?;

    Ok(Json(players.iter().map(PlayerResponse::from).collect()))
}

/// Get a player by ID
///
/// GET /api/players/:id
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let id = parse_player_id(&id)?;
    let player = state
        .players
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Player not found: {}", id)))?;

    Ok(Json(PlayerResponse::from(&player)))
}

/// Create a new player
///
/// POST /api/players
pub async fn create_player(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let player = Player::new(req.into()).map_err(ApiError::unprocessable)?;

    if state.players.find_by_name(player.name()).await?.is_some() {
        return Err(ApiError::bad_request("Player name already exists"));
    }

    state.players.save(&player).await?;
    tracing::info!(player_id = %player.id(), name = player.name(), "Player created");

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(&player))))
}

/// Update a player
///
/// PUT /api/players/:id
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdatePlayerRequest>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let id = parse_player_id(&id)?;
    let mut player = state
        .players
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Player not found: {}", id)))?;

    if let Some(name) = &req.name {
        let taken = state
            .players
            .find_by_name(name)
            .await?
            .is_some_and(|other| other.id() != id);
        if taken {
            return Err(ApiError::bad_request("Player name already exists"));
        }
    }

    player.apply(req.into()).map_err(ApiError::unprocessable)?;
    state.players.save(&player).await?;
    tracing::info!(player_id = %id, "Player updated");

    Ok(Json(PlayerResponse::from(&player)))
}

/// Delete a player
///
/// DELETE /api/players/:id
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_player_id(&id)?;
    state.players.delete(id).await?;
    tracing::info!(player_id = %id, "Player deleted");

    Ok(Json(MessageResponse {
        message: "Player deleted successfully".to_string(),
    }))
}

/// Import several players at once
///
/// Rows are handled independently: a row that fails validation, clashes
/// with an existing name or hits a store error is reported in `errors`
/// and the import carries on with the next row.
///
/// POST /api/players/import
pub async fn import_players(
    State(state): State<AppState>,
    ApiJson(rows): ApiJson<Vec<CreatePlayerRequest>>,
) -> Json<ImportResponse> {
    let mut players = Vec::new();
    let mut errors = Vec::new();

    for (index, req) in rows.into_iter().enumerate() {
        let row = index + 1;
        match import_row(&state, req).await {
            Ok(player) => players.push(PlayerResponse::from(&player)),
            Err(reason) => errors.push(format!("Row {}: {}", row, reason)),
        }
    }

    tracing::info!(created = players.len(), rejected = errors.len(), "Players imported");

    Json(ImportResponse {
        created: players.len(),
        errors,
        players,
    })
}

async fn import_row(state: &AppState, req: CreatePlayerRequest) -> Result<Player, String> {
    let player = Player::new(req.into())?;
    let exists = |name: &str| format!("Player '{}' already exists", name);

    match state.players.find_by_name(player.name()).await {
        Ok(Some(_)) => return Err(exists(player.name())),
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, name = player.name(), "Import lookup failed");
            return Err(e.to_string());
        }
    }

    match state.players.save(&player).await {
        Ok(()) => Ok(player),
        Err(RepositoryError::DuplicateName(name)) => Err(exists(&name)),
        Err(e) => {
            tracing::error!(error = %e, name = player.name(), "Import save failed");
            Err(e.to_string())
        }
    }
}
