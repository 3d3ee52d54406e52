use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::player::Player;
use crate::domain::repositories::{PlayerRepository, RepositoryError, RepositoryResult};

/// Process-local player store
///
/// Keeps players in insertion order; nothing survives a restart. Used for
/// local runs without PostgreSQL and as the store behind the HTTP tests.
#[derive(Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<Vec<Player>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn save(&self, player: &Player) -> RepositoryResult<()> {
        let mut players = self.players.write().await;

        if players
            .iter()
            .any(|p| p.id() != player.id() && p.name() == player.name())
        {
            return Err(RepositoryError::DuplicateName(player.name().to_string()));
        }

        match players.iter_mut().find(|p| p.id() == player.id()) {
            Some(existing) => *existing = player.clone(),
            None => players.push(player.clone()),
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Player>> {
        let players = self.players.read().await;
        Ok(players.iter().find(|p| p.id() == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Player>> {
        let players = self.players.read().await;
        Ok(players.iter().find(|p| p.name() == name).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        Ok(self.players.read().await.clone())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<Vec<Player>> {
        let players = self.players.read().await;
        Ok(players
            .iter()
            .filter(|p| ids.contains(&p.id()))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut players = self.players.write().await;
        let before = players.len();
        players.retain(|p| p.id() != id);

        if players.len() == before {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{PlayerChanges, PlayerDraft, PlayerSkills, Position, PreferredFoot};

    fn player(name: &str) -> Player {
        Player::new(PlayerDraft {
            name: name.to_string(),
            position: Position::Attacker,
            points: 70,
            photo: String::new(),
            skills: PlayerSkills {
                pace: 80,
                shooting: 78,
                passing: 65,
                defending: 30,
                dribbling: 75,
                physical: 60,
            },
            age: 22,
            preferred_foot: PreferredFoot::Right,
            nationality: "Brazil".to_string(),
            is_subscribed: false,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn save_then_find_by_id_and_name() {
        let repo = InMemoryPlayerRepository::new();
        let saved = player("Striker");
        repo.save(&saved).await.unwrap();

        let by_id = repo.find_by_id(saved.id()).await.unwrap();
        let by_name = repo.find_by_name("Striker").await.unwrap();

        assert_eq!(by_id, Some(saved.clone()));
        assert_eq!(by_name, Some(saved));
    }

    #[tokio::test]
    async fn save_existing_player_updates_in_place() {
        let repo = InMemoryPlayerRepository::new();
        let mut saved = player("Winger");
        repo.save(&saved).await.unwrap();

        saved
            .apply(PlayerChanges {
                points: Some(91),
                ..Default::default()
            })
            .unwrap();
        repo.save(&saved).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].points(), 91);
    }

    #[tokio::test]
    async fn save_rejects_name_used_by_another_player() {
        let repo = InMemoryPlayerRepository::new();
        repo.save(&player("Keeper")).await.unwrap();

        let err = repo.save(&player("Keeper")).await.unwrap_err();

        assert!(matches!(err, RepositoryError::DuplicateName(name) if name == "Keeper"));
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = InMemoryPlayerRepository::new();
        let names = ["First", "Second", "Third"];
        for name in names {
            repo.save(&player(name)).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let stored: Vec<&str> = all.iter().map(Player::name).collect();
        assert_eq!(stored, names);
    }

    #[tokio::test]
    async fn find_by_ids_skips_unknown_ids() {
        let repo = InMemoryPlayerRepository::new();
        let known = player("Known");
        repo.save(&known).await.unwrap();

        let found = repo.find_by_ids(&[known.id(), Uuid::new_v4()]).await.unwrap();

        assert_eq!(found, vec![known]);
    }

    #[tokio::test]
    async fn delete_missing_player_fails() {
        let repo = InMemoryPlayerRepository::new();
        let id = Uuid::new_v4();

        let err = repo.delete(id).await.unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn delete_removes_player() {
        let repo = InMemoryPlayerRepository::new();
        let saved = player("Defender");
        repo.save(&saved).await.unwrap();

        repo.delete(saved.id()).await.unwrap();

        assert!(repo.find_by_id(saved.id()).await.unwrap().is_none());
    }
}
