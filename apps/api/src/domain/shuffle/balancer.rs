use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use super::errors::ShuffleError;
use super::lineup::{TeamSheet, TeamSplit};
use crate::domain::player::{Player, Position};

/// Number of players a shuffle takes as input
pub const SQUAD_SIZE: usize = 16;
/// Number of players on each side
pub const TEAM_SIZE: usize = 8;

const MIN_DEFENDERS: usize = 4;
const MIN_ATTACKERS: usize = 4;
const MIN_MIDFIELDERS: usize = 2;

/// How the players left after the mandatory quota are spread over the teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalanceStrategy {
    /// Walk the shuffled pool once, handing each player to the side with the
    /// lower running total (team1 on ties)
    #[default]
    Greedy,
    /// Try every 3/3 split of the pool and keep the one with the smallest gap
    Exhaustive,
}

impl fmt::Display for BalanceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceStrategy::Greedy => write!(f, "greedy"),
            BalanceStrategy::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

impl FromStr for BalanceStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(BalanceStrategy::Greedy),
            "exhaustive" => Ok(BalanceStrategy::Exhaustive),
            other => Err(format!(
                "Unknown balance strategy: {} (expected greedy or exhaustive)",
                other
            )),
        }
    }
}

/// Splits a squad of sixteen into two teams of eight
///
/// Each team gets at least 2 defenders, 2 attackers and 1 midfielder. The
/// mandatory members are drawn at random from their position; the six
/// players left over are then spread to even out the point totals.
///
/// The greedy strategy is a heuristic: a skewed pool order can leave a gap
/// that an exhaustive search would close.
///
/// # Example
/// ```
/// use squad_shuffle_api::domain::shuffle::{BalanceStrategy, ShuffleError, TeamBalancer};
///
/// let balancer = TeamBalancer::new(BalanceStrategy::Greedy);
/// let err = balancer.partition(&[]).unwrap_err();
///
/// assert_eq!(err, ShuffleError::InvalidInputSize { expected: 16, found: 0 });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamBalancer {
    strategy: BalanceStrategy,
}

impl TeamBalancer {
    pub fn new(strategy: BalanceStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> BalanceStrategy {
        self.strategy
    }

    /// Partitions the squad using the thread-local random generator
    pub fn partition(&self, players: &[Player]) -> Result<TeamSplit, ShuffleError> {
        self.partition_with_rng(players, &mut rand::thread_rng())
    }

    /// Partitions the squad drawing randomness from `rng`
    ///
    /// # Errors
    /// * `InvalidInputSize` - `players` does not hold exactly 16 entries
    /// * `InsufficientPosition` - fewer than 4 DEF, 4 ATT or 2 MID
    pub fn partition_with_rng<R: Rng + ?Sized>(
        &self,
        players: &[Player],
        rng: &mut R,
    ) -> Result<TeamSplit, ShuffleError> {
        if players.len() != SQUAD_SIZE {
            return Err(ShuffleError::InvalidInputSize {
                expected: SQUAD_SIZE,
                found: players.len(),
            });
        }

        let mut defenders = bucket(players, Position::Defender);
        let mut midfielders = bucket(players, Position::Midfielder);
        let mut attackers = bucket(players, Position::Attacker);

        require(&defenders, Position::Defender, MIN_DEFENDERS)?;
        require(&attackers, Position::Attacker, MIN_ATTACKERS)?;
        require(&midfielders, Position::Midfielder, MIN_MIDFIELDERS)?;

        defenders.shuffle(rng);
        attackers.shuffle(rng);
        midfielders.shuffle(rng);

        let mut team1 = Vec::with_capacity(TEAM_SIZE);
        team1.extend([
            defenders[0],
            defenders[1],
            attackers[0],
            attackers[1],
            midfielders[0],
        ]);

        let mut team2 = Vec::with_capacity(TEAM_SIZE);
        team2.extend([
            defenders[2],
            defenders[3],
            attackers[2],
            attackers[3],
            midfielders[1],
        ]);

        let mut pool: Vec<&Player> = defenders[MIN_DEFENDERS..]
            .iter()
            .chain(&attackers[MIN_ATTACKERS..])
            .chain(&midfielders[MIN_MIDFIELDERS..])
            .copied()
            .collect();
        pool.shuffle(rng);

        match self.strategy {
            BalanceStrategy::Greedy => distribute_greedy(&mut team1, &mut team2, pool),
            BalanceStrategy::Exhaustive => distribute_exhaustive(&mut team1, &mut team2, pool),
        }

        Ok(TeamSplit {
            team1: to_sheet(team1),
            team2: to_sheet(team2),
        })
    }
}

fn bucket(players: &[Player], position: Position) -> Vec<&Player> {
    players.iter().filter(|p| p.position() == position).collect()
}

fn require(bucket: &[&Player], position: Position, required: usize) -> Result<(), ShuffleError> {
    if bucket.len() < required {
        return Err(ShuffleError::InsufficientPosition {
            position,
            required,
            found: bucket.len(),
        });
    }
    Ok(())
}

fn points_of(team: &[&Player]) -> u32 {
    team.iter().map(|p| u32::from(p.points())).sum()
}

fn to_sheet(team: Vec<&Player>) -> TeamSheet {
    TeamSheet::new(team.into_iter().cloned().collect())
}

/// Hands each pool player to the side with the lower running total.
///
/// Ties go to team1. A side that already has eight players takes no more,
/// so both sides end on eight whatever the pool order.
fn distribute_greedy<'a>(
    team1: &mut Vec<&'a Player>,
    team2: &mut Vec<&'a Player>,
    pool: Vec<&'a Player>,
) {
    let mut team1_points = points_of(team1);
    let mut team2_points = points_of(team2);

    for player in pool {
        let to_team1 = if team1.len() >= TEAM_SIZE {
            false
        } else if team2.len() >= TEAM_SIZE {
            true
        } else {
            team1_points <= team2_points
        };

        if to_team1 {
            team1_points += u32::from(player.points());
            team1.push(player);
        } else {
            team2_points += u32::from(player.points());
            team2.push(player);
        }
    }
}

/// Picks the split of the pool with the smallest point gap.
///
/// The first minimum in enumeration order wins; since the pool is shuffled
/// beforehand, equally good splits are chosen at random.
fn distribute_exhaustive<'a>(
    team1: &mut Vec<&'a Player>,
    team2: &mut Vec<&'a Player>,
    pool: Vec<&'a Player>,
) {
    let open_slots = TEAM_SIZE.saturating_sub(team1.len()).min(pool.len());
    let team1_base = points_of(team1);
    let team2_base = points_of(team2);
    let pool_points = points_of(&pool);

    let mut best: Option<(u32, Vec<usize>)> = None;
    for picked in combinations(pool.len(), open_slots) {
        let picked_points: u32 = picked.iter().map(|&i| u32::from(pool[i].points())).sum();
        let gap = (team1_base + picked_points).abs_diff(team2_base + pool_points - picked_points);

        if best.as_ref().map_or(true, |(best_gap, _)| gap < *best_gap) {
            best = Some((gap, picked));
        }
    }

    let picked = best.map(|(_, picked)| picked).unwrap_or_default();
    for (index, player) in pool.into_iter().enumerate() {
        if picked.contains(&index) {
            team1.push(player);
        } else {
            team2.push(player);
        }
    }
}

/// All `k`-element index subsets of `0..n`, in lexicographic order
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn walk(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            walk(i + 1, n, k, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    walk(0, n, k, &mut Vec::with_capacity(k), &mut out);
    out
}
