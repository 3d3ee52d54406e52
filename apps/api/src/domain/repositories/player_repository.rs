use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::player::Player;

/// Errors raised by player store implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Player not found: {0}")]
    NotFound(Uuid),

    #[error("Player name already exists: {0}")]
    DuplicateName(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt player record {id}: {reason}")]
    CorruptRecord { id: Uuid, reason: String },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for the Player aggregate
///
/// Defines the contract for persisting and retrieving players.
/// Implementations should handle storage-specific details.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Save a player (insert or update)
    ///
    /// Fails with `DuplicateName` if another player already uses the name.
    async fn save(&self, player: &Player) -> RepositoryResult<()>;

    /// Find a player by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Player>>;

    /// Find a player by exact name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Player>>;

    /// List every player, oldest first
    async fn find_all(&self) -> RepositoryResult<Vec<Player>>;

    /// Find the players matching the given IDs
    ///
    /// Unknown IDs are skipped; callers compare the result against the request.
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<Vec<Player>>;

    /// Delete a player by ID
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;

    /// Check the store is reachable
    async fn ping(&self) -> RepositoryResult<()>;
}
