// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_player_repository;
pub mod postgres_player_repository;

pub use in_memory_player_repository::InMemoryPlayerRepository;
pub use postgres_player_repository::PostgresPlayerRepository;
