use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::RepositoryError;
use crate::domain::shuffle::{SelectionError, ShuffleError};

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 422 Unprocessable Entity error for field validation failures
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        } else {
            tracing::warn!(status = %self.status, "{}", self.message);
        }

        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            RepositoryError::DuplicateName(_) => Self::bad_request(err.to_string()),
            RepositoryError::Database(_) | RepositoryError::CorruptRecord { .. } => {
                Self::internal_server_error(err.to_string())
            }
        }
    }
}

impl From<ShuffleError> for ApiError {
    fn from(err: ShuffleError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::InvalidSelectionSize { .. }
            | SelectionError::DuplicateIdentifiers(_) => Self::bad_request(err.to_string()),
            SelectionError::UnresolvedIdentifiers(_) => Self::not_found(err.to_string()),
            SelectionError::Shuffle(inner) => inner.into(),
            SelectionError::Repository(inner) => {
                Self::internal_server_error(format!("Error shuffling teams: {}", inner))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Position;
    use uuid::Uuid;

    #[test]
    fn shuffle_preconditions_are_client_errors() {
        let err = ApiError::from(ShuffleError::InsufficientPosition {
            position: Position::Attacker,
            required: 4,
            found: 2,
        });

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "At least 4 ATT players are required. Found 2.");
    }

    #[test]
    fn unresolved_identifiers_map_to_not_found() {
        let err = ApiError::from(SelectionError::UnresolvedIdentifiers(vec![
            "player-abc".to_string(),
        ]));

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Some players not found. Missing IDs: player-abc");
    }

    #[test]
    fn wrapped_shuffle_error_keeps_its_status() {
        let err = ApiError::from(SelectionError::Shuffle(ShuffleError::InvalidInputSize {
            expected: 16,
            found: 3,
        }));

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_player_maps_to_not_found() {
        let err = ApiError::from(RepositoryError::NotFound(Uuid::new_v4()));

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_name_maps_to_bad_request() {
        let err = ApiError::from(RepositoryError::DuplicateName("Pele".to_string()));

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Player name already exists: Pele");
    }
}
