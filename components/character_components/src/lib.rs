//! Playable character roster and the transient player avatar state.

use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, fmt},
};

pub struct CharacterComponentsPlugin;

impl Plugin for CharacterComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CharacterType>()
            .register_type::<PlayerState>();
    }
}

/// One of the four fixed character identities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, Reflect,
)]
#[serde(rename_all = "lowercase")]
pub enum CharacterType {
    #[default]
    Sword,
    Gun,
    Magic,
    Fist,
}

impl CharacterType {
    pub const ALL: [CharacterType; 4] = [
        CharacterType::Sword,
        CharacterType::Gun,
        CharacterType::Magic,
        CharacterType::Fist,
    ];

    /// Stable lowercase identifier, also used as the prefix of skill ids.
    pub fn id(self) -> &'static str {
        match self {
            CharacterType::Sword => "sword",
            CharacterType::Gun => "gun",
            CharacterType::Magic => "magic",
            CharacterType::Fist => "fist",
        }
    }

    /// Soul price shown by the character select screen.
    ///
    /// The unlock manager never reads this itself; callers pass it along
    /// with the unlock request.
    pub fn unlock_cost(self) -> u32 {
        match self {
            CharacterType::Sword => 0,
            CharacterType::Gun => 50,
            CharacterType::Magic => 100,
            CharacterType::Fist => 75,
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Per-character progression record. Persisted as part of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub name: String,
    pub unlocked: bool,
    pub level: u32,
    /// Unlocked skill-tree ids in purchase order, without duplicates.
    pub unlocked_skills: Vec<String>,
    /// Accent colour as `#rrggbb`.
    pub color: String,
}

impl CharacterRecord {
    pub fn new(name: impl Into<String>, color: impl Into<String>, unlocked: bool) -> Self {
        Self {
            name: name.into(),
            unlocked,
            level: 1,
            unlocked_skills: Vec::new(),
            color: color.into(),
        }
    }

    pub fn has_skill(&self, skill_id: &str) -> bool {
        self.unlocked_skills.iter().any(|id| id == skill_id)
    }
}

/// All character records keyed by identity.
pub type Roster = BTreeMap<CharacterType, CharacterRecord>;

/// Fresh roster: only the sword wielder is playable.
pub fn default_roster() -> Roster {
    CharacterType::ALL
        .into_iter()
        .map(|character| {
            let record = match character {
                CharacterType::Sword => CharacterRecord::new("刀使い", "#e53935", true),
                CharacterType::Gun => CharacterRecord::new("銃使い", "#42a5f5", false),
                CharacterType::Magic => CharacterRecord::new("術師", "#ab47bc", false),
                CharacterType::Fist => CharacterRecord::new("格闘家", "#ffa726", false),
            };
            (character, record)
        })
        .collect()
}

/// Avatar state read by rendering. Session-only, never saved.
#[derive(Debug, Clone, PartialEq, Reflect)]
#[reflect(Default)]
pub struct PlayerState {
    pub hp: u32,
    pub max_hp: u32,
    pub position: Vec3,
    pub rotation: f32,
    pub is_attacking: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            hp: 100,
            max_hp: 100,
            position: Vec3::ZERO,
            rotation: 0.0,
            is_attacking: false,
        }
    }
}

impl PlayerState {
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_only_sword_unlocked() {
        let roster = default_roster();
        assert_eq!(roster.len(), 4);
        for (character, record) in &roster {
            assert_eq!(record.unlocked, *character == CharacterType::Sword);
            assert_eq!(record.level, 1);
            assert!(record.unlocked_skills.is_empty());
        }
    }

    #[test]
    fn test_damage_and_heal_clamp() {
        let mut player = PlayerState::default();
        player.take_damage(130);
        assert_eq!(player.hp, 0);

        player.heal(40);
        assert_eq!(player.hp, 40);
        player.heal(500);
        assert_eq!(player.hp, player.max_hp);
    }

    #[test]
    fn test_character_display_and_cost_table() {
        assert_eq!(CharacterType::Magic.to_string(), "magic");
        let costs: Vec<u32> = CharacterType::ALL.iter().map(|c| c.unlock_cost()).collect();
        assert_eq!(costs, vec![0, 50, 100, 75]);
    }
}
