//! Static skill catalog.
//!
//! Two kinds of data live here:
//! - **Skill trees**: per-character passive upgrades bought with souls. Each
//!   skill has a cost and an optional list of prerequisite skill ids.
//! - **Ability kits**: the fixed Q/E/R combat abilities of each character,
//!   carrying cooldown lengths. Kits are never unlocked; every character
//!   always has its full kit.
//!
//! Everything is `'static` and read-only, so lookups hand out plain
//! references.

mod kits;
mod trees;

pub use {kits::*, trees::*};

use {
    character_components::CharacterType,
    serde::Serialize,
    skill_components::{AbilitySlot, AbilityState, SlotCooldown},
};

/// Upgrade purchasable from a character's skill tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDefinition {
    /// Unique identifier (e.g. "sword_combo")
    pub id: &'static str,
    pub character: CharacterType,
    /// 1 = root, 3 = ultimate upgrade
    pub tier: u8,
    /// Display name shown in UI
    pub name: &'static str,
    pub description: &'static str,
    /// Price in souls
    pub cost: u32,
    /// Skills that must already be unlocked. Empty for roots.
    pub requires: &'static [&'static str],
    pub effect: SkillEffect,
}

/// What an upgrade does once bought. Applied by combat code, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SkillEffect {
    /// Damage multiplier
    Damage(f32),
    /// Speed multiplier (attack, reload, movement)
    Speed(f32),
    /// Incoming damage multiplier
    Defense(f32),
    /// Skill-specific magnitude (combo length, pierce count, ...)
    Special(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillTree {
    pub character: CharacterType,
    pub skills: &'static [SkillDefinition],
}

/// Combat ability bound to a slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotAbility {
    pub name: &'static str,
    /// Cooldown in seconds. Zero for the charge-gated ultimate.
    pub cooldown: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityKit {
    pub character: CharacterType,
    pub q: SlotAbility,
    pub e: SlotAbility,
    pub r: SlotAbility,
}

impl AbilityKit {
    pub fn slot(&self, slot: AbilitySlot) -> &SlotAbility {
        match slot {
            AbilitySlot::Q => &self.q,
            AbilitySlot::E => &self.e,
            AbilitySlot::R => &self.r,
        }
    }
}

pub fn skill_tree(character: CharacterType) -> &'static SkillTree {
    match character {
        CharacterType::Sword => &SWORD_TREE,
        CharacterType::Gun => &GUN_TREE,
        CharacterType::Magic => &MAGIC_TREE,
        CharacterType::Fist => &FIST_TREE,
    }
}

pub fn ability_kit(character: CharacterType) -> &'static AbilityKit {
    match character {
        CharacterType::Sword => &SWORD_KIT,
        CharacterType::Gun => &GUN_KIT,
        CharacterType::Magic => &MAGIC_KIT,
        CharacterType::Fist => &FIST_KIT,
    }
}

/// Iterates every skill of every tree.
pub fn all_skills() -> impl Iterator<Item = &'static SkillDefinition> {
    CharacterType::ALL
        .into_iter()
        .flat_map(|character| skill_tree(character).skills.iter())
}

/// Linear lookup across all trees.
pub fn skill_by_id(id: &str) -> Option<&'static SkillDefinition> {
    all_skills().find(|skill| skill.id == id)
}

/// True when the player can afford `skill` and owns all of its prerequisites.
pub fn can_unlock<S: AsRef<str>>(skill: &SkillDefinition, unlocked_ids: &[S], souls: u32) -> bool {
    if souls < skill.cost {
        return false;
    }

    skill
        .requires
        .iter()
        .all(|required| unlocked_ids.iter().any(|id| id.as_ref() == *required))
}

/// Fresh ability state for `character`: all slots ready, no charge.
pub fn default_ability_state(character: CharacterType) -> AbilityState {
    let mut state = AbilityState::default();
    reset_cooldowns(&mut state, character);
    state
}

/// Puts every slot back to READY with the kit's cooldown lengths.
/// The active skill and ultimate charge are left alone.
pub fn reset_cooldowns(state: &mut AbilityState, character: CharacterType) {
    let kit = ability_kit(character);
    for slot in AbilitySlot::ALL {
        *state.cooldown_mut(slot) = SlotCooldown::ready(kit.slot(slot).cooldown);
    }
}
