// Default roster loaded into an empty player store

use thiserror::Error;

use crate::domain::player::{Player, PlayerDraft, PlayerSkills, Position, PreferredFoot};
use crate::domain::repositories::{PlayerRepository, RepositoryError};

/// Errors raised while seeding the roster
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid seed player {name}: {reason}")]
    InvalidPlayer { name: String, reason: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// name, position, points, skills (pace, shooting, passing, defending,
/// dribbling, physical), age, preferred foot, nationality
type SeedRow = (&'static str, Position, u8, [u8; 6], u8, PreferredFoot, &'static str);

const DEFAULT_ROSTER: [SeedRow; 16] = {
    use Position::{Attacker as ATT, Defender as DEF, Midfielder as MID};
    use PreferredFoot::{Left, Right};
    [
        ("Manan Shah", DEF, 85, [78, 45, 82, 89, 65, 84], 28, Right, "Brazil"),
        ("Alex Johnson", ATT, 88, [91, 87, 79, 35, 88, 75], 25, Left, "England"),
        ("David Rodriguez", MID, 86, [82, 76, 91, 74, 83, 79], 26, Right, "Spain"),
        ("James Wilson", DEF, 83, [75, 42, 78, 87, 62, 88], 29, Left, "Scotland"),
        ("Carlos Mendez", ATT, 90, [93, 89, 81, 28, 92, 72], 24, Right, "Argentina"),
        ("Robert Brown", MID, 84, [79, 72, 87, 78, 80, 82], 27, Right, "USA"),
        ("Lucas Thompson", DEF, 81, [73, 38, 76, 85, 58, 86], 30, Right, "Canada"),
        ("Francesco Rossi", ATT, 87, [88, 85, 77, 32, 89, 74], 26, Left, "Italy"),
        ("Kevin O'Connor", MID, 82, [77, 68, 84, 76, 78, 80], 28, Right, "Ireland"),
        ("Ahmed Hassan", DEF, 84, [76, 45, 81, 88, 64, 85], 27, Right, "Egypt"),
        ("Pierre Dubois", ATT, 86, [89, 83, 75, 30, 87, 73], 25, Left, "France"),
        ("Viktor Petrov", MID, 85, [81, 74, 89, 77, 82, 81], 29, Right, "Russia"),
        ("Daniel Park", DEF, 80, [72, 40, 74, 84, 60, 83], 31, Left, "South Korea"),
        ("Miguel Santos", ATT, 89, [92, 88, 80, 29, 91, 76], 23, Right, "Portugal"),
        ("Thomas Mueller", MID, 87, [83, 78, 92, 75, 85, 82], 26, Right, "Germany"),
        ("Hiroshi Tanaka", DEF, 82, [74, 43, 79, 86, 63, 84], 28, Right, "Japan"),
    ]
};

/// The sixteen-player roster a fresh installation starts with
pub fn default_roster() -> Vec<PlayerDraft> {
    DEFAULT_ROSTER
        .iter()
        .map(|&(name, position, points, skills, age, preferred_foot, nationality)| {
            let [pace, shooting, passing, defending, dribbling, physical] = skills;
            PlayerDraft {
                name: name.to_string(),
                position,
                points,
                photo: String::new(),
                skills: PlayerSkills {
                    pace,
                    shooting,
                    passing,
                    defending,
                    dribbling,
                    physical,
                },
                age,
                preferred_foot,
                nationality: nationality.to_string(),
                is_subscribed: false,
            }
        })
        .collect()
}

/// Inserts the default roster when the store holds no players
///
/// Returns how many players were inserted; a store that already has players
/// is left untouched and yields zero.
pub async fn seed_default_roster(players: &dyn PlayerRepository) -> Result<usize, SeedError> {
    if !players.find_all().await?.is_empty() {
        tracing::info!("Player store already populated, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    for draft in default_roster() {
        let name = draft.name.clone();
        let player =
            Player::new(draft).map_err(|reason| SeedError::InvalidPlayer { name, reason })?;
        players.save(&player).await?;
        inserted += 1;
    }

    tracing::info!(players = inserted, "Seeded default roster");
    Ok(inserted)
}
