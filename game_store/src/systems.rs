use {
    crate::GameStore,
    bevy::prelude::*,
    game_state_resources::ActionResult,
    progress_events::*,
};

/// Advances cooldowns and the active skill by the frame delta.
pub fn tick_ability_cooldowns(
    time: Res<Time>,
    mut store: ResMut<GameStore>,
    mut commands: Commands,
) {
    let delta = time.delta_secs();
    if delta <= 0.0 {
        return;
    }

    // Skip the mutable borrow on idle frames so change detection stays quiet
    let abilities = &store.state().abilities;
    let idle = abilities.active_skill.is_none()
        && abilities.q.is_ready()
        && abilities.e.is_ready()
        && abilities.r.is_ready();
    if idle {
        return;
    }

    let result = store.update_cooldowns(delta);
    report(&mut commands, "update_cooldowns", result);
}

/// Saves progress when the app is closing.
pub fn save_on_exit(mut exits: MessageReader<AppExit>, store: Res<GameStore>) {
    if exits.read().next().is_some() {
        info!("App exiting, saving progress");
        store.save();
    }
}

fn report(commands: &mut Commands, action: &'static str, result: ActionResult) {
    if let Err(reason) = result {
        commands.trigger(ActionRejected { action, reason });
    }
}

pub fn on_souls_collected(
    trigger: On<SoulsCollected>,
    mut store: ResMut<GameStore>,
    mut commands: Commands,
) {
    let result = store.add_souls(trigger.event().amount);
    report(&mut commands, "add_souls", result);
}

pub fn on_enemy_defeated(
    trigger: On<EnemyDefeated>,
    mut store: ResMut<GameStore>,
    mut commands: Commands,
) {
    let result = store.defeat_enemy_with_drop(trigger.event().souls);
    report(&mut commands, "defeat_enemy", result);
}

pub fn on_character_unlock_requested(
    trigger: On<CharacterUnlockRequested>,
    mut store: ResMut<GameStore>,
    mut commands: Commands,
) {
    let character = trigger.event().character;
    let result = store.unlock_character(character, character.unlock_cost());
    report(&mut commands, "unlock_character", result);
}

pub fn on_skill_purchase_requested(
    trigger: On<SkillPurchaseRequested>,
    mut store: ResMut<GameStore>,
    mut commands: Commands,
) {
    let result = store.purchase_skill(&trigger.event().skill_id);
    report(&mut commands, "purchase_skill", result);
}

pub fn on_character_switch_requested(
    trigger: On<CharacterSwitchRequested>,
    mut store: ResMut<GameStore>,
    mut commands: Commands,
) {
    let result = store.switch_character(trigger.event().character);
    report(&mut commands, "switch_character", result);
}

pub fn on_ability_activation_requested(
    trigger: On<AbilityActivationRequested>,
    mut store: ResMut<GameStore>,
    mut commands: Commands,
) {
    let result = store.use_skill(trigger.event().slot);
    report(&mut commands, "use_skill", result);
}

pub fn on_player_damaged(
    trigger: On<PlayerDamaged>,
    mut store: ResMut<GameStore>,
    mut commands: Commands,
) {
    let result = store.take_damage(trigger.event().amount);
    report(&mut commands, "take_damage", result);
}

pub fn on_player_healed(
    trigger: On<PlayerHealed>,
    mut store: ResMut<GameStore>,
    mut commands: Commands,
) {
    let result = store.heal(trigger.event().amount);
    report(&mut commands, "heal", result);
}
