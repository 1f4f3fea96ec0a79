//! Currency, character unlocks and skill-tree purchases.
//!
//! Every function mutates a candidate snapshot in place and returns
//! `Err(Rejection)` *before* touching anything when a precondition fails, so
//! a rejected call always leaves the candidate identical to its input.


use {
    bevy::log::info,
    character_components::CharacterType,
    game_state_resources::{ActionResult, GameSnapshot, Rejection},
    skills_assets::{can_unlock, reset_cooldowns, skill_by_id},
};

/// Ultimate charge granted per defeated enemy.
pub const ULT_CHARGE_PER_KILL: u32 = 15;

pub fn add_souls(snapshot: &mut GameSnapshot, amount: u32) -> ActionResult {
    let progression = &mut snapshot.progression;
    progression.souls = progression.souls.saturating_add(amount);
    progression.total_souls = progression.total_souls.saturating_add(amount);
    Ok(())
}

pub fn defeat_enemy(snapshot: &mut GameSnapshot) -> ActionResult {
    snapshot.progression.enemies_defeated = snapshot.progression.enemies_defeated.saturating_add(1);
    snapshot.abilities.add_charge(ULT_CHARGE_PER_KILL);
    Ok(())
}

/// Spends `cost` souls to make `character` playable.
///
/// The price is supplied by the caller (see [`CharacterType::unlock_cost`]).
pub fn unlock_character(
    snapshot: &mut GameSnapshot,
    character: CharacterType,
    cost: u32,
) -> ActionResult {
    let Some(record) = snapshot.character(character) else {
        return Err(Rejection::UnknownCharacter(character));
    };
    if record.unlocked {
        return Err(Rejection::CharacterAlreadyUnlocked(character));
    }
    snapshot.ensure_affordable(cost)?;

    snapshot.progression.souls -= cost;
    if let Some(record) = snapshot.character_mut(character) {
        record.unlocked = true;
    }
    info!(%character, cost, "Character unlocked");
    Ok(())
}

/// Spends `cost` souls to add `skill_id` to the selected character.
///
/// Only cost and duplication are checked here; prerequisites are the
/// caller's business (see [`purchase_skill`]).
pub fn unlock_skill(snapshot: &mut GameSnapshot, skill_id: &str, cost: u32) -> ActionResult {
    let character = snapshot.current_character;
    let Some(record) = snapshot.character(character) else {
        return Err(Rejection::UnknownCharacter(character));
    };
    if record.has_skill(skill_id) {
        return Err(Rejection::SkillAlreadyUnlocked(skill_id.to_string()));
    }
    snapshot.ensure_affordable(cost)?;

    snapshot.progression.souls -= cost;
    if let Some(record) = snapshot.character_mut(character) {
        record.unlocked_skills.push(skill_id.to_string());
    }
    info!(skill_id = %skill_id, %character, cost, "Skill unlocked");
    Ok(())
}

/// Catalog-driven purchase: resolves the skill, checks it belongs to the
/// selected character's tree and that its prerequisites are owned, then
/// pays the catalog price through [`unlock_skill`].
pub fn purchase_skill(snapshot: &mut GameSnapshot, skill_id: &str) -> ActionResult {
    let Some(skill) = skill_by_id(skill_id) else {
        return Err(Rejection::UnknownSkill(skill_id.to_string()));
    };
    if skill.character != snapshot.current_character {
        return Err(Rejection::SkillNotInTree {
            skill_id: skill_id.to_string(),
            character: snapshot.current_character,
        });
    }

    let owned = snapshot.current_skills();
    if owned.iter().any(|id| id == skill.id) {
        return Err(Rejection::SkillAlreadyUnlocked(skill_id.to_string()));
    }
    if !can_unlock(skill, owned, snapshot.progression.souls) {
        let missing: Vec<&'static str> = skill
            .requires
            .iter()
            .copied()
            .filter(|required| !owned.iter().any(|id| id == required))
            .collect();
        if !missing.is_empty() {
            return Err(Rejection::MissingPrerequisites {
                skill_id: skill_id.to_string(),
                missing,
            });
        }
        snapshot.ensure_affordable(skill.cost)?;
    }

    unlock_skill(snapshot, skill.id, skill.cost)
}

/// Selects `character` and resets slot cooldowns to its kit.
/// Ultimate charge carries over.
pub fn switch_character(snapshot: &mut GameSnapshot, character: CharacterType) -> ActionResult {
    if snapshot.character(character).is_none() {
        return Err(Rejection::UnknownCharacter(character));
    }
    if !snapshot.is_unlocked(character) {
        return Err(Rejection::CharacterLocked(character));
    }

    snapshot.current_character = character;
    reset_cooldowns(&mut snapshot.abilities, character);
    info!(%character, "Switched character");
    Ok(())
}
