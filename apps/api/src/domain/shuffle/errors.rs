use thiserror::Error;

use crate::domain::player::Position;
use crate::domain::repositories::RepositoryError;

/// Precondition failures of the team balancer
///
/// All variants are caller-correctable; the balancer checks them before any
/// player is assigned, so a failure never carries partial team data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShuffleError {
    #[error("Exactly {expected} players are required for team shuffle. Found {found} players.")]
    InvalidInputSize { expected: usize, found: usize },

    #[error("At least {required} {position} players are required. Found {found}.")]
    InsufficientPosition {
        position: Position,
        required: usize,
        found: usize,
    },
}

/// Failures while resolving the input set for a shuffle
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Exactly {expected} player IDs are required. Received {found}.")]
    InvalidSelectionSize { expected: usize, found: usize },

    #[error("Duplicate player IDs in selection: {}", .0.join(", "))]
    DuplicateIdentifiers(Vec<String>),

    /// IDs that match no player, including ones that are not valid UUIDs
    #[error("Some players not found. Missing IDs: {}", .0.join(", "))]
    UnresolvedIdentifiers(Vec<String>),

    #[error(transparent)]
    Shuffle(#[from] ShuffleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
