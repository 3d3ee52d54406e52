// Repository interfaces (ports)
// Implementations live in the infrastructure layer

pub mod player_repository;

pub use player_repository::{PlayerRepository, RepositoryError, RepositoryResult};
