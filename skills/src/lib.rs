//! Combat ability state machine.
//!
//! Slots Q and E are timer driven: READY while `remaining <= 0`, COOLING
//! otherwise. Slot R is gated by ultimate charge. Nothing here schedules
//! itself; the game loop advances time through [`update_cooldowns`].


use {
    bevy::log::debug,
    game_state_resources::{ActionResult, GameSnapshot, Rejection},
    skill_components::{AbilitySlot, ActiveSkill},
    skills_assets::ability_kit,
};

/// How long each slot's ability stays active, in seconds.
pub fn active_duration(slot: AbilitySlot) -> f32 {
    match slot {
        AbilitySlot::Q => 2.0,
        AbilitySlot::E | AbilitySlot::R => 3.0,
    }
}

/// Fires the ability bound to `slot` for the selected character.
///
/// A successful use replaces whatever ability was still active.
pub fn use_skill(snapshot: &mut GameSnapshot, slot: AbilitySlot) -> ActionResult {
    let character = snapshot.current_character;
    let abilities = &mut snapshot.abilities;

    match slot {
        AbilitySlot::R => {
            if !abilities.is_ultimate_charged() {
                return Err(Rejection::UltimateNotCharged {
                    charge: abilities.ultimate_charge,
                });
            }
            abilities.ultimate_charge = 0;
        }
        AbilitySlot::Q | AbilitySlot::E => {
            let cooldown = abilities.cooldown_mut(slot);
            if !cooldown.is_ready() {
                return Err(Rejection::OnCooldown {
                    slot,
                    remaining: cooldown.remaining,
                });
            }
            cooldown.start();
        }
    }

    let skill = ActiveSkill {
        id: format!("{}_{}", character.id(), slot.key()),
        name: ability_kit(character).slot(slot).name.to_string(),
        remaining_duration: active_duration(slot),
    };
    debug!(skill_id = %skill.id, "Ability activated");
    abilities.active_skill = Some(skill);
    Ok(())
}

/// Advances every cooling slot and the active skill by `delta` seconds.
pub fn update_cooldowns(snapshot: &mut GameSnapshot, delta: f32) -> ActionResult {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(Rejection::InvalidDelta(delta));
    }

    let abilities = &mut snapshot.abilities;
    for slot in AbilitySlot::ALL {
        abilities.cooldown_mut(slot).tick(delta);
    }

    let expired = abilities
        .active_skill
        .as_mut()
        .is_some_and(|active| !active.tick(delta));
    if expired && let Some(finished) = abilities.active_skill.take() {
        debug!(skill_id = %finished.id, "Ability finished");
    }
    Ok(())
}

pub fn add_ult_charge(snapshot: &mut GameSnapshot, amount: u32) -> ActionResult {
    snapshot.abilities.add_charge(amount);
    Ok(())
}
