use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest rating accepted for points and individual skills
pub const MIN_RATING: u8 = 1;
/// Highest rating accepted for points and individual skills
pub const MAX_RATING: u8 = 99;

/// Position a player lines up in
///
/// Serialized with the short codes used on the wire and in the database:
/// `DEF`, `MID`, `ATT`.
///
/// # Example
/// ```
/// use squad_shuffle_api::domain::player::value_objects::Position;
///
/// let position: Position = "MID".parse().expect("valid position");
/// assert_eq!(position, Position::Midfielder);
/// assert_eq!(position.to_string(), "MID");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "player_position")]
pub enum Position {
    /// Defender
    #[serde(rename = "DEF")]
    #[sqlx(rename = "DEF")]
    Defender,
    /// Midfielder
    #[serde(rename = "MID")]
    #[sqlx(rename = "MID")]
    Midfielder,
    /// Attacker
    #[serde(rename = "ATT")]
    #[sqlx(rename = "ATT")]
    Attacker,
}

impl Position {
    /// Short code used in formations and on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Attacker => "ATT",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEF" => Ok(Position::Defender),
            "MID" => Ok(Position::Midfielder),
            "ATT" => Ok(Position::Attacker),
            other => Err(format!("Invalid position: {} (expected DEF, MID or ATT)", other)),
        }
    }
}

/// The player's stronger foot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "preferred_foot")]
pub enum PreferredFoot {
    Left,
    Right,
}

impl fmt::Display for PreferredFoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferredFoot::Left => write!(f, "Left"),
            PreferredFoot::Right => write!(f, "Right"),
        }
    }
}

/// Skill breakdown shown on the player card
///
/// Every attribute is a rating between 1 and 99. The breakdown is descriptive
/// only; team balancing uses the overall `points` of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub defending: u8,
    pub dribbling: u8,
    pub physical: u8,
}

impl PlayerSkills {
    /// Checks every attribute is within the rating range
    ///
    /// # Returns
    /// * `Ok(())` - All attributes are valid
    /// * `Err(String)` - Names the first attribute out of range
    pub fn validate(&self) -> Result<(), String> {
        let attributes = [
            ("pace", self.pace),
            ("shooting", self.shooting),
            ("passing", self.passing),
            ("defending", self.defending),
            ("dribbling", self.dribbling),
            ("physical", self.physical),
        ];

        for (name, value) in attributes {
            if !is_valid_rating(value) {
                return Err(format!(
                    "Skill {} must be between {} and {}",
                    name, MIN_RATING, MAX_RATING
                ));
            }
        }

        Ok(())
    }
}

/// Whether a rating lies within 1..=99
pub fn is_valid_rating(value: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(value: u8) -> PlayerSkills {
        PlayerSkills {
            pace: value,
            shooting: value,
            passing: value,
            defending: value,
            dribbling: value,
            physical: value,
        }
    }

    #[test]
    fn position_parses_short_codes() {
        assert_eq!("DEF".parse::<Position>(), Ok(Position::Defender));
        assert_eq!("MID".parse::<Position>(), Ok(Position::Midfielder));
        assert_eq!("ATT".parse::<Position>(), Ok(Position::Attacker));
    }

    #[test]
    fn position_rejects_unknown_code() {
        assert!("GK".parse::<Position>().is_err());
        assert!("def".parse::<Position>().is_err());
    }

    #[test]
    fn position_display_uses_code() {
        assert_eq!(Position::Defender.to_string(), "DEF");
        assert_eq!(Position::Midfielder.to_string(), "MID");
        assert_eq!(Position::Attacker.to_string(), "ATT");
    }

    #[test]
    fn position_serializes_as_code() {
        let json = serde_json::to_string(&Position::Attacker).unwrap();
        assert_eq!(json, "\"ATT\"");

        let parsed: Position = serde_json::from_str("\"DEF\"").unwrap();
        assert_eq!(parsed, Position::Defender);
    }

    #[test]
    fn preferred_foot_round_trips_through_json() {
        let parsed: PreferredFoot = serde_json::from_str("\"Left\"").unwrap();
        assert_eq!(parsed, PreferredFoot::Left);
        assert!(serde_json::from_str::<PreferredFoot>("\"Both\"").is_err());
    }

    #[test]
    fn skills_within_range_are_valid() {
        assert!(skills(1).validate().is_ok());
        assert!(skills(99).validate().is_ok());
    }

    #[test]
    fn skills_out_of_range_are_rejected() {
        let mut invalid = skills(50);
        invalid.dribbling = 0;

        let err = invalid.validate().unwrap_err();
        assert!(err.contains("dribbling"));

        let mut invalid = skills(50);
        invalid.pace = 100;
        assert!(invalid.validate().is_err());
    }
}
