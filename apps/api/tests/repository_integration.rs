//! Integration tests for the PostgreSQL repository layer
//!
//! These tests verify that `PostgresPlayerRepository` correctly interacts
//! with the database, including CRUD operations, name uniqueness and lookup
//! by a list of IDs.
//!
//! They need a reachable PostgreSQL server in `DATABASE_URL` and are ignored
//! by default: `cargo test -- --ignored`.

use squad_shuffle_api::domain::player::{
    Player, PlayerChanges, PlayerDraft, PlayerSkills, Position, PreferredFoot,
};
use squad_shuffle_api::domain::repositories::{PlayerRepository, RepositoryError};
use squad_shuffle_api::infrastructure::repositories::PostgresPlayerRepository;
use sqlx::PgPool;
use uuid::Uuid;

/// Set up test database connection pool with migrations applied
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Build a player with a name unique to this test run
fn test_player(label: &str, position: Position, points: u8) -> Player {
    Player::new(PlayerDraft {
        name: format!("{} {}", label, Uuid::new_v4()),
        position,
        points,
        photo: "https://example.com/p.png".to_string(),
        skills: PlayerSkills {
            pace: 71,
            shooting: 64,
            passing: 77,
            defending: 58,
            dribbling: 73,
            physical: 69,
        },
        age: 29,
        preferred_foot: PreferredFoot::Left,
        nationality: "Argentina".to_string(),
        is_subscribed: false,
    })
    .expect("valid player")
}

/// Clean up test data
async fn cleanup(pool: &PgPool, ids: &[Uuid]) {
    sqlx::query("DELETE FROM players WHERE id = ANY($1)")
        .bind(ids)
        .execute(pool)
        .await
        .expect("Failed to cleanup test players");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_player_repository_save_and_find() {
    let pool = setup_test_db().await;
    let repo = PostgresPlayerRepository::new(pool.clone());

    let player = test_player("Save", Position::Midfielder, 82);
    repo.save(&player).await.expect("Failed to save player");

    let by_id = repo
        .find_by_id(player.id())
        .await
        .expect("Failed to find player by id")
        .expect("Player should exist");
    assert_eq!(by_id.name(), player.name());
    assert_eq!(by_id.position(), Position::Midfielder);
    assert_eq!(by_id.points(), 82);
    assert_eq!(by_id.skills(), player.skills());
    assert_eq!(by_id.preferred_foot(), PreferredFoot::Left);

    let by_name = repo
        .find_by_name(player.name())
        .await
        .expect("Failed to find player by name");
    assert_eq!(by_name.map(|p| p.id()), Some(player.id()));

    cleanup(&pool, &[player.id()]).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_player_repository_update_existing() {
    let pool = setup_test_db().await;
    let repo = PostgresPlayerRepository::new(pool.clone());

    let mut player = test_player("Update", Position::Defender, 60);
    repo.save(&player).await.expect("Failed to save player");

    player
        .apply(PlayerChanges {
            points: Some(66),
            is_subscribed: Some(true),
            ..Default::default()
        })
        .expect("valid changes");
    repo.save(&player).await.expect("Failed to update player");

    let stored = repo
        .find_by_id(player.id())
        .await
        .expect("Failed to find player")
        .expect("Player should exist");
    assert_eq!(stored.points(), 66);
    assert!(stored.is_subscribed());

    cleanup(&pool, &[player.id()]).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_player_repository_duplicate_name_fails() {
    let pool = setup_test_db().await;
    let repo = PostgresPlayerRepository::new(pool.clone());

    let first = test_player("Twin", Position::Attacker, 70);
    repo.save(&first).await.expect("First save should succeed");

    let second = Player::new(PlayerDraft {
        name: first.name().to_string(),
        position: Position::Defender,
        points: 50,
        photo: String::new(),
        skills: first.skills(),
        age: 20,
        preferred_foot: PreferredFoot::Right,
        nationality: "Chile".to_string(),
        is_subscribed: false,
    })
    .expect("valid player");

    let result = repo.save(&second).await;
    assert!(
        matches!(result, Err(RepositoryError::DuplicateName(_))),
        "Saving a duplicate name should fail: {:?}",
        result
    );

    cleanup(&pool, &[first.id(), second.id()]).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_player_repository_find_by_ids_skips_unknown() {
    let pool = setup_test_db().await;
    let repo = PostgresPlayerRepository::new(pool.clone());

    let a = test_player("Lookup A", Position::Defender, 61);
    let b = test_player("Lookup B", Position::Attacker, 62);
    repo.save(&a).await.expect("save a");
    repo.save(&b).await.expect("save b");

    let found = repo
        .find_by_ids(&[a.id(), b.id(), Uuid::new_v4()])
        .await
        .expect("Failed to find players by ids");

    let mut ids: Vec<Uuid> = found.iter().map(Player::id).collect();
    ids.sort();
    let mut expected = vec![a.id(), b.id()];
    expected.sort();
    assert_eq!(ids, expected);

    cleanup(&pool, &[a.id(), b.id()]).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_player_repository_delete() {
    let pool = setup_test_db().await;
    let repo = PostgresPlayerRepository::new(pool.clone());

    let player = test_player("Delete", Position::Midfielder, 55);
    repo.save(&player).await.expect("Failed to save player");

    repo.delete(player.id()).await.expect("Failed to delete player");
    assert!(repo
        .find_by_id(player.id())
        .await
        .expect("query should succeed")
        .is_none());

    let result = repo.delete(player.id()).await;
    assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == player.id()));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_player_repository_ping() {
    let pool = setup_test_db().await;
    let repo = PostgresPlayerRepository::new(pool);

    repo.ping().await.expect("Database should be reachable");
}
