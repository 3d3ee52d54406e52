use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::player::{Player, PlayerSkills, Position, PreferredFoot};
use crate::domain::repositories::{PlayerRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of PlayerRepository
///
/// Queries are bound at runtime so the crate builds without a live database.
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    /// Creates a new PostgresPlayerRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the `players` table
#[derive(Debug, sqlx::FromRow)]
struct PlayerRow {
    id: Uuid,
    name: String,
    position: Position,
    points: i32,
    photo: String,
    skills: Json<PlayerSkills>,
    age: i32,
    preferred_foot: PreferredFoot,
    nationality: String,
    is_subscribed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlayerRow {
    fn into_player(self) -> RepositoryResult<Player> {
        let id = self.id;
        let corrupt = |field: &str, value: i32| RepositoryError::CorruptRecord {
            id,
            reason: format!("{} out of range: {}", field, value),
        };

        let points = u8::try_from(self.points).map_err(|_| corrupt("points", self.points))?;
        let age = u8::try_from(self.age).map_err(|_| corrupt("age", self.age))?;

        Ok(Player::from_persistence(
            self.id,
            self.name,
            self.position,
            points,
            self.photo,
            self.skills.0,
            age,
            self.preferred_foot,
            self.nationality,
            self.is_subscribed,
            self.created_at,
            self.updated_at,
        ))
    }
}

fn into_players(rows: Vec<PlayerRow>) -> RepositoryResult<Vec<Player>> {
    rows.into_iter().map(PlayerRow::into_player).collect()
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn save(&self, player: &Player) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO players (
                id, name, position, points, photo, skills, age,
                preferred_foot, nationality, is_subscribed, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                position = EXCLUDED.position,
                points = EXCLUDED.points,
                photo = EXCLUDED.photo,
                skills = EXCLUDED.skills,
                age = EXCLUDED.age,
                preferred_foot = EXCLUDED.preferred_foot,
                nationality = EXCLUDED.nationality,
                is_subscribed = EXCLUDED.is_subscribed,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(player.id())
        .bind(player.name())
        .bind(player.position())
        .bind(i32::from(player.points()))
        .bind(player.photo())
        .bind(Json(player.skills()))
        .bind(i32::from(player.age()))
        .bind(player.preferred_foot())
        .bind(player.nationality())
        .bind(player.is_subscribed())
        .bind(player.created_at())
        .bind(player.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
            if duplicate {
                RepositoryError::DuplicateName(player.name().to_string())
            } else {
                RepositoryError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT
                id, name, position, points, photo, skills, age,
                preferred_foot, nationality, is_subscribed, created_at, updated_at
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PlayerRow::into_player).transpose()
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT
                id, name, position, points, photo, skills, age,
                preferred_foot, nationality, is_subscribed, created_at, updated_at
            FROM players
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PlayerRow::into_player).transpose()
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT
                id, name, position, points, photo, skills, age,
                preferred_foot, nationality, is_subscribed, created_at, updated_at
            FROM players
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        into_players(rows)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT
                id, name, position, points, photo, skills, age,
                preferred_foot, nationality, is_subscribed, created_at, updated_at
            FROM players
            WHERE id = ANY($1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        into_players(rows)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
