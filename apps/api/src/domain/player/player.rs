use super::value_objects::{is_valid_rating, PlayerSkills, Position, PreferredFoot};
use chrono::{DateTime, Utc};
use uuid::Uuid;

const MAX_NAME_LEN: usize = 100;
const MAX_PHOTO_LEN: usize = 500;
const MAX_NATIONALITY_LEN: usize = 50;
const MIN_AGE: u8 = 16;
const MAX_AGE: u8 = 50;

/// Everything needed to register a new player
#[derive(Debug, Clone)]
pub struct PlayerDraft {
    pub name: String,
    pub position: Position,
    pub points: u8,
    pub photo: String,
    pub skills: PlayerSkills,
    pub age: u8,
    pub preferred_foot: PreferredFoot,
    pub nationality: String,
    pub is_subscribed: bool,
}

/// Partial update of a player; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct PlayerChanges {
    pub name: Option<String>,
    pub position: Option<Position>,
    pub points: Option<u8>,
    pub photo: Option<String>,
    pub skills: Option<PlayerSkills>,
    pub age: Option<u8>,
    pub preferred_foot: Option<PreferredFoot>,
    pub nationality: Option<String>,
    pub is_subscribed: Option<bool>,
}

/// Player aggregate root
///
/// A member of the roster. Only `position` and `points` matter when teams
/// are shuffled; the remaining attributes describe the player card.
///
/// # Invariants
/// - Name is 1-100 characters
/// - Points and every skill are between 1 and 99
/// - Age is between 16 and 50
/// - Photo is at most 500 characters
/// - Nationality is 1-50 characters
/// - `updated_at` is never earlier than `created_at`
///
/// # Example
/// ```
/// use squad_shuffle_api::domain::player::{Player, PlayerDraft};
/// use squad_shuffle_api::domain::player::value_objects::{PlayerSkills, Position, PreferredFoot};
///
/// let player = Player::new(PlayerDraft {
///     name: "Marco".to_string(),
///     position: Position::Midfielder,
///     points: 81,
///     photo: "https://example.com/marco.png".to_string(),
///     skills: PlayerSkills {
///         pace: 70, shooting: 75, passing: 88,
///         defending: 60, dribbling: 84, physical: 66,
///     },
///     age: 27,
///     preferred_foot: PreferredFoot::Right,
///     nationality: "Italy".to_string(),
///     is_subscribed: false,
/// }).expect("valid player");
///
/// assert_eq!(player.points(), 81);
/// assert_eq!(player.position(), Position::Midfielder);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: Uuid,
    name: String,
    position: Position,
    points: u8,
    photo: String,
    skills: PlayerSkills,
    age: u8,
    preferred_foot: PreferredFoot,
    nationality: String,
    is_subscribed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Player {
    /// Creates a new Player aggregate with a fresh id
    ///
    /// # Returns
    /// * `Ok(Player)` - The validated player
    /// * `Err(String)` - If any field is out of range
    pub fn new(draft: PlayerDraft) -> Result<Self, String> {
        validate_name(&draft.name)?;
        validate_points(draft.points)?;
        validate_photo(&draft.photo)?;
        draft.skills.validate()?;
        validate_age(draft.age)?;
        validate_nationality(&draft.nationality)?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            name: draft.name,
            position: draft.position,
            points: draft.points,
            photo: draft.photo,
            skills: draft.skills,
            age: draft.age,
            preferred_foot: draft.preferred_foot,
            nationality: draft.nationality,
            is_subscribed: draft.is_subscribed,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update
    ///
    /// All supplied fields are validated before any of them is written, so a
    /// rejected update leaves the player unchanged. A successful update bumps
    /// `updated_at`, even when no field was supplied.
    pub fn apply(&mut self, changes: PlayerChanges) -> Result<(), String> {
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }
        if let Some(points) = changes.points {
            validate_points(points)?;
        }
        if let Some(photo) = &changes.photo {
            validate_photo(photo)?;
        }
        if let Some(skills) = &changes.skills {
            skills.validate()?;
        }
        if let Some(age) = changes.age {
            validate_age(age)?;
        }
        if let Some(nationality) = &changes.nationality {
            validate_nationality(nationality)?;
        }

        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(position) = changes.position {
            self.position = position;
        }
        if let Some(points) = changes.points {
            self.points = points;
        }
        if let Some(photo) = changes.photo {
            self.photo = photo;
        }
        if let Some(skills) = changes.skills {
            self.skills = skills;
        }
        if let Some(age) = changes.age {
            self.age = age;
        }
        if let Some(preferred_foot) = changes.preferred_foot {
            self.preferred_foot = preferred_foot;
        }
        if let Some(nationality) = changes.nationality {
            self.nationality = nationality;
        }
        if let Some(is_subscribed) = changes.is_subscribed {
            self.is_subscribed = is_subscribed;
        }

        self.updated_at = Utc::now().max(self.created_at);

        Ok(())
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Overall rating used for balancing
    pub fn points(&self) -> u8 {
        self.points
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn skills(&self) -> PlayerSkills {
        self.skills
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn preferred_foot(&self) -> PreferredFoot {
        self.preferred_foot
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn is_subscribed(&self) -> bool {
        self.is_subscribed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Player from persistence layer data
    ///
    /// Skips validation; the stored row was validated when it was written.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        name: String,
        position: Position,
        points: u8,
        photo: String,
        skills: PlayerSkills,
        age: u8,
        preferred_foot: PreferredFoot,
        nationality: String,
        is_subscribed: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            position,
            points,
            photo,
            skills,
            age,
            preferred_foot,
            nationality,
            is_subscribed,
            created_at,
            updated_at,
        }
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    let len = name.chars().count();
    if len == 0 {
        return Err("Name cannot be empty".to_string());
    }
    if len > MAX_NAME_LEN {
        return Err(format!("Name cannot exceed {} characters", MAX_NAME_LEN));
    }
    Ok(())
}

fn validate_points(points: u8) -> Result<(), String> {
    if !is_valid_rating(points) {
        return Err("Points must be between 1 and 99".to_string());
    }
    Ok(())
}

fn validate_photo(photo: &str) -> Result<(), String> {
    if photo.chars().count() > MAX_PHOTO_LEN {
        return Err(format!("Photo cannot exceed {} characters", MAX_PHOTO_LEN));
    }
    Ok(())
}

fn validate_age(age: u8) -> Result<(), String> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(format!("Age must be between {} and {}", MIN_AGE, MAX_AGE));
    }
    Ok(())
}

fn validate_nationality(nationality: &str) -> Result<(), String> {
    let len = nationality.chars().count();
    if len == 0 {
        return Err("Nationality cannot be empty".to_string());
    }
    if len > MAX_NATIONALITY_LEN {
        return Err(format!(
            "Nationality cannot exceed {} characters",
            MAX_NATIONALITY_LEN
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PlayerDraft {
        PlayerDraft {
            name: "Test Player".to_string(),
            position: Position::Defender,
            points: 75,
            photo: "https://example.com/photo.png".to_string(),
            skills: PlayerSkills {
                pace: 70,
                shooting: 55,
                passing: 68,
                defending: 82,
                dribbling: 60,
                physical: 79,
            },
            age: 24,
            preferred_foot: PreferredFoot::Left,
            nationality: "Portugal".to_string(),
            is_subscribed: false,
        }
    }

    #[test]
    fn create_player_with_valid_draft() {
        let player = Player::new(draft()).unwrap();

        assert_eq!(player.name(), "Test Player");
        assert_eq!(player.position(), Position::Defender);
        assert_eq!(player.points(), 75);
        assert_eq!(player.age(), 24);
        assert_eq!(player.preferred_foot(), PreferredFoot::Left);
        assert_eq!(player.nationality(), "Portugal");
        assert!(!player.is_subscribed());
        assert_eq!(player.created_at(), player.updated_at());
    }

    #[test]
    fn each_player_gets_a_fresh_id() {
        let a = Player::new(draft()).unwrap();
        let b = Player::new(draft()).unwrap();

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn create_player_with_empty_name_fails() {
        let mut invalid = draft();
        invalid.name = String::new();

        let err = Player::new(invalid).unwrap_err();
        assert!(err.contains("Name cannot be empty"));
    }

    #[test]
    fn create_player_with_long_name_fails() {
        let mut invalid = draft();
        invalid.name = "x".repeat(101);

        assert!(Player::new(invalid).is_err());
    }

    #[test]
    fn create_player_with_zero_points_fails() {
        let mut invalid = draft();
        invalid.points = 0;

        let err = Player::new(invalid).unwrap_err();
        assert!(err.contains("Points must be between 1 and 99"));
    }

    #[test]
    fn create_player_with_points_above_99_fails() {
        let mut invalid = draft();
        invalid.points = 100;

        assert!(Player::new(invalid).is_err());
    }

    #[test]
    fn create_player_with_out_of_range_age_fails() {
        let mut too_young = draft();
        too_young.age = 15;
        assert!(Player::new(too_young).is_err());

        let mut too_old = draft();
        too_old.age = 51;
        assert!(Player::new(too_old).is_err());
    }

    #[test]
    fn create_player_with_invalid_skill_fails() {
        let mut invalid = draft();
        invalid.skills.physical = 0;

        let err = Player::new(invalid).unwrap_err();
        assert!(err.contains("physical"));
    }

    #[test]
    fn create_player_with_empty_nationality_fails() {
        let mut invalid = draft();
        invalid.nationality = String::new();

        assert!(Player::new(invalid).is_err());
    }

    #[test]
    fn apply_changes_only_supplied_fields() {
        let mut player = Player::new(draft()).unwrap();
        let id = player.id();

        player
            .apply(PlayerChanges {
                points: Some(88),
                position: Some(Position::Attacker),
                is_subscribed: Some(true),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(player.id(), id);
        assert_eq!(player.points(), 88);
        assert_eq!(player.position(), Position::Attacker);
        assert!(player.is_subscribed());
        assert_eq!(player.name(), "Test Player");
        assert_eq!(player.age(), 24);
        assert!(player.updated_at() >= player.created_at());
    }

    #[test]
    fn rejected_changes_leave_player_untouched() {
        let mut player = Player::new(draft()).unwrap();
        let before = player.clone();

        let result = player.apply(PlayerChanges {
            name: Some("Renamed".to_string()),
            points: Some(0),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(player, before);
    }
}
