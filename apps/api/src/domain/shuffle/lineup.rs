use std::fmt;

use crate::domain::player::{Player, Position};

/// Positional make-up of a team, printed as `DEF-MID-ATT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Formation {
    pub defenders: usize,
    pub midfielders: usize,
    pub attackers: usize,
}

impl Formation {
    /// Counts the players of each position
    pub fn of(players: &[Player]) -> Self {
        players
            .iter()
            .fold(Formation::default(), |mut formation, player| {
                match player.position() {
                    Position::Defender => formation.defenders += 1,
                    Position::Midfielder => formation.midfielders += 1,
                    Position::Attacker => formation.attackers += 1,
                }
                formation
            })
    }

    pub fn total(&self) -> usize {
        self.defenders + self.midfielders + self.attackers
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.attackers)
    }
}

/// One side of a shuffle: its players plus derived totals
#[derive(Debug, Clone)]
pub struct TeamSheet {
    players: Vec<Player>,
    total_points: u32,
    formation: Formation,
}

impl TeamSheet {
    pub fn new(players: Vec<Player>) -> Self {
        let total_points = players.iter().map(|p| u32::from(p.points())).sum();
        let formation = Formation::of(&players);

        Self {
            players,
            total_points,
            formation,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn formation(&self) -> Formation {
        self.formation
    }
}

/// The two teams produced by a shuffle
#[derive(Debug, Clone)]
pub struct TeamSplit {
    pub team1: TeamSheet,
    pub team2: TeamSheet,
}

impl TeamSplit {
    /// Absolute difference between the two point totals
    pub fn point_gap(&self) -> u32 {
        self.team1.total_points().abs_diff(self.team2.total_points())
    }
}
