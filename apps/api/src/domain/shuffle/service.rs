use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use super::balancer::{TeamBalancer, SQUAD_SIZE};
use super::errors::SelectionError;
use super::lineup::TeamSplit;
use crate::domain::player::Player;
use crate::domain::repositories::PlayerRepository;

/// Loads the squad from the player store and hands it to the balancer
///
/// Either the whole roster is shuffled, which must then hold exactly sixteen
/// players, or an explicit selection of sixteen player IDs.
#[derive(Clone)]
pub struct ShuffleService {
    players: Arc<dyn PlayerRepository>,
    balancer: TeamBalancer,
}

impl ShuffleService {
    pub fn new(players: Arc<dyn PlayerRepository>, balancer: TeamBalancer) -> Self {
        Self { players, balancer }
    }

    /// Shuffles every player in the roster
    pub async fn shuffle_roster(&self) -> Result<TeamSplit, SelectionError> {
        let squad = self.players.find_all().await?;
        tracing::debug!(players = squad.len(), "Loaded roster for shuffle");

        self.partition(&squad)
    }

    /// Shuffles the players with the given IDs
    ///
    /// IDs are taken as the client sent them; one that is not a valid UUID
    /// can match no player and is reported as unresolved.
    ///
    /// # Errors
    /// * `InvalidSelectionSize` - not exactly 16 IDs
    /// * `DuplicateIdentifiers` - an ID appears more than once
    /// * `UnresolvedIdentifiers` - some IDs match no player, listed in request order
    pub async fn shuffle_selection(&self, ids: &[String]) -> Result<TeamSplit, SelectionError> {
        if ids.len() != SQUAD_SIZE {
            return Err(SelectionError::InvalidSelectionSize {
                expected: SQUAD_SIZE,
                found: ids.len(),
            });
        }

        let parsed: Vec<Option<Uuid>> = ids
            .iter()
            .map(|raw| Uuid::parse_str(raw).ok())
            .collect();

        let mut seen = HashSet::with_capacity(ids.len());
        let mut duplicates = Vec::new();
        for (raw, id) in ids.iter().zip(&parsed) {
            let key = match id {
                Some(id) => id.to_string(),
                None => raw.clone(),
            };
            if !seen.insert(key) && !duplicates.contains(raw) {
                duplicates.push(raw.clone());
            }
        }
        if !duplicates.is_empty() {
            return Err(SelectionError::DuplicateIdentifiers(duplicates));
        }

        let known: Vec<Uuid> = parsed.iter().flatten().copied().collect();
        let squad = self.players.find_by_ids(&known).await?;

        let found: HashSet<Uuid> = squad.iter().map(Player::id).collect();
        let missing: Vec<String> = ids
            .iter()
            .zip(&parsed)
            .filter(|(_, id)| !matches!(id, Some(id) if found.contains(id)))
            .map(|(raw, _)| raw.clone())
            .collect();
        if !missing.is_empty() {
            tracing::warn!(
                missing = missing.len(),
                "Shuffle selection references unknown players"
            );
            return Err(SelectionError::UnresolvedIdentifiers(missing));
        }

        self.partition(&squad)
    }

    fn partition(&self, squad: &[Player]) -> Result<TeamSplit, SelectionError> {
        let split = self.balancer.partition(squad)?;

        tracing::info!(
            strategy = %self.balancer.strategy(),
            team1_points = split.team1.total_points(),
            team2_points = split.team2.total_points(),
            team1_formation = %split.team1.formation(),
            team2_formation = %split.team2.formation(),
            point_gap = split.point_gap(),
            "Teams shuffled"
        );

        Ok(split)
    }
}
