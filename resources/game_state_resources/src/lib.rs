//! The game snapshot: the single value every engine action reads and replaces.

use {
    bevy::prelude::*,
    character_components::{CharacterRecord, CharacterType, PlayerState, Roster, default_roster},
    skill_components::{AbilitySlot, AbilityState},
    skills_assets::default_ability_state,
    thiserror::Error,
};

/// Currency and run counters.
#[derive(Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Default)]
pub struct ProgressionState {
    /// Spendable souls
    pub souls: u32,
    /// Lifetime souls earned; spending never lowers it
    pub total_souls: u32,
    pub enemies_defeated: u32,
    pub current_stage: String,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            souls: 0,
            total_souls: 0,
            enemies_defeated: 0,
            current_stage: "shibuya".to_string(),
        }
    }
}

/// Everything the engine owns. Replaced as a whole on every committed action.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub player: PlayerState,
    pub progression: ProgressionState,
    /// Must always point at an unlocked roster entry.
    pub current_character: CharacterType,
    pub characters: Roster,
    pub abilities: AbilityState,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let current_character = CharacterType::default();
        Self {
            player: PlayerState::default(),
            progression: ProgressionState::default(),
            current_character,
            characters: default_roster(),
            abilities: default_ability_state(current_character),
        }
    }
}

impl GameSnapshot {
    pub fn character(&self, character: CharacterType) -> Option<&CharacterRecord> {
        self.characters.get(&character)
    }

    pub fn character_mut(&mut self, character: CharacterType) -> Option<&mut CharacterRecord> {
        self.characters.get_mut(&character)
    }

    pub fn current_record(&self) -> Option<&CharacterRecord> {
        self.character(self.current_character)
    }

    pub fn is_unlocked(&self, character: CharacterType) -> bool {
        self.character(character).is_some_and(|record| record.unlocked)
    }

    /// Unlocked skill-tree ids of the selected character.
    pub fn current_skills(&self) -> &[String] {
        self.current_record()
            .map(|record| record.unlocked_skills.as_slice())
            .unwrap_or_default()
    }

    /// Checks `souls >= cost` without touching state.
    pub fn ensure_affordable(&self, cost: u32) -> ActionResult {
        if self.progression.souls < cost {
            return Err(Rejection::InsufficientSouls {
                required: cost,
                available: self.progression.souls,
            });
        }
        Ok(())
    }

    /// True when the fields written to durable storage are identical.
    pub fn same_persisted_fields(&self, other: &GameSnapshot) -> bool {
        self.progression == other.progression
            && self.current_character == other.current_character
            && self.characters == other.characters
    }
}

/// Why an action left the snapshot untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("not enough souls: need {required}, have {available}")]
    InsufficientSouls { required: u32, available: u32 },
    #[error("character '{0}' is already unlocked")]
    CharacterAlreadyUnlocked(CharacterType),
    #[error("character '{0}' is locked")]
    CharacterLocked(CharacterType),
    /// The roster has no entry for this character (possible after loading an
    /// older save that replaced the roster).
    #[error("character '{0}' is missing from the roster")]
    UnknownCharacter(CharacterType),
    #[error("skill '{0}' is already unlocked")]
    SkillAlreadyUnlocked(String),
    #[error("unknown skill '{0}'")]
    UnknownSkill(String),
    #[error("skill '{skill_id}' is not in the {character} tree")]
    SkillNotInTree {
        skill_id: String,
        character: CharacterType,
    },
    #[error("skill '{skill_id}' requires {}", .missing.join(", "))]
    MissingPrerequisites {
        skill_id: String,
        missing: Vec<&'static str>,
    },
    #[error("slot {slot} is cooling down ({remaining:.1}s left)")]
    OnCooldown { slot: AbilitySlot, remaining: f32 },
    #[error("ultimate charge at {charge}/100")]
    UltimateNotCharged { charge: u32 },
    #[error("invalid tick delta {0}")]
    InvalidDelta(f32),
}

/// `Ok(())` when the action was applied (or had nothing to change).
pub type ActionResult = Result<(), Rejection>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_selects_unlocked_character() {
        let snapshot = GameSnapshot::default();
        assert_eq!(snapshot.current_character, CharacterType::Sword);
        assert!(snapshot.is_unlocked(snapshot.current_character));
        assert_eq!(snapshot.progression.current_stage, "shibuya");
        assert!(snapshot.current_skills().is_empty());
    }

    #[test]
    fn test_ensure_affordable() {
        let mut snapshot = GameSnapshot::default();
        snapshot.progression.souls = 49;
        assert_eq!(
            snapshot.ensure_affordable(50),
            Err(Rejection::InsufficientSouls {
                required: 50,
                available: 49
            })
        );
        assert_eq!(snapshot.ensure_affordable(49), Ok(()));
    }

    #[test]
    fn test_persisted_fields_ignore_transient_state() {
        let saved = GameSnapshot::default();
        let mut session = saved.clone();
        session.player.take_damage(10);
        session.abilities.add_charge(30);
        assert!(saved.same_persisted_fields(&session));

        session.progression.souls += 1;
        assert!(!saved.same_persisted_fields(&session));
    }

    #[test]
    fn test_rejection_messages() {
        let rejection = Rejection::MissingPrerequisites {
            skill_id: "sword_ultimate".to_string(),
            missing: vec!["sword_combo", "sword_iai"],
        };
        assert_eq!(
            rejection.to_string(),
            "skill 'sword_ultimate' requires sword_combo, sword_iai"
        );
        assert_eq!(
            Rejection::OnCooldown {
                slot: AbilitySlot::E,
                remaining: 10.5
            }
            .to_string(),
            "slot E is cooling down (10.5s left)"
        );
    }
}
