use {
    character_components::{CharacterType, Roster},
    game_state_resources::GameSnapshot,
    serde::{Deserialize, Serialize},
};

/// Persisted subset of the game snapshot.
///
/// Every field is optional on the way in: whatever a save file carries
/// replaces the default wholesale, whatever it lacks keeps the default.
/// Player and ability state are session-only and never written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProgress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub souls: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_souls: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemies_defeated: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_character: Option<CharacterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<Roster>,
}

impl From<&GameSnapshot> for SavedProgress {
    fn from(snapshot: &GameSnapshot) -> Self {
        Self {
            souls: Some(snapshot.progression.souls),
            total_souls: Some(snapshot.progression.total_souls),
            enemies_defeated: Some(snapshot.progression.enemies_defeated),
            current_stage: Some(snapshot.progression.current_stage.clone()),
            current_character: Some(snapshot.current_character),
            characters: Some(snapshot.characters.clone()),
        }
    }
}

/// Shallow merge of a loaded save over `defaults`.
///
/// `characters` is replaced as a whole map when present, never merged per
/// character; a save written before a character existed loads without it.
pub fn merge_defaults(defaults: GameSnapshot, partial: SavedProgress) -> GameSnapshot {
    let mut merged = defaults;
    let progression = &mut merged.progression;

    if let Some(souls) = partial.souls {
        progression.souls = souls;
    }
    if let Some(total_souls) = partial.total_souls {
        progression.total_souls = total_souls;
    }
    if let Some(enemies_defeated) = partial.enemies_defeated {
        progression.enemies_defeated = enemies_defeated;
    }
    if let Some(current_stage) = partial.current_stage {
        progression.current_stage = current_stage;
    }
    if let Some(current_character) = partial.current_character {
        merged.current_character = current_character;
    }
    if let Some(characters) = partial.characters {
        merged.characters = characters;
    }

    merged
}
