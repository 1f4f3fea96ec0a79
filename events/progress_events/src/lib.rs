use {
    bevy::prelude::*,
    character_components::CharacterType,
    game_state_resources::Rejection,
    skill_components::AbilitySlot,
};

pub struct ProgressEventsPlugin;

impl Plugin for ProgressEventsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SoulsCollected>()
            .register_type::<EnemyDefeated>()
            .register_type::<CharacterUnlockRequested>()
            .register_type::<SkillPurchaseRequested>()
            .register_type::<CharacterSwitchRequested>()
            .register_type::<AbilityActivationRequested>()
            .register_type::<PlayerDamaged>()
            .register_type::<PlayerHealed>();
    }
}

/// Souls picked up outside of combat (chests, stage rewards).
#[derive(Event, Debug, Clone, Default, Reflect)]
#[reflect(Default)]
pub struct SoulsCollected {
    pub amount: u32,
}

/// An enemy died; `souls` is its drop.
#[derive(Event, Debug, Clone, Default, Reflect)]
#[reflect(Default)]
pub struct EnemyDefeated {
    pub souls: u32,
}

/// Buy a character at its listed price.
#[derive(Event, Debug, Clone, Default, Reflect)]
#[reflect(Default)]
pub struct CharacterUnlockRequested {
    pub character: CharacterType,
}

/// Buy a skill-tree upgrade for the selected character.
#[derive(Event, Debug, Clone, Default, Reflect)]
#[reflect(Default)]
pub struct SkillPurchaseRequested {
    pub skill_id: String,
}

#[derive(Event, Debug, Clone, Default, Reflect)]
#[reflect(Default)]
pub struct CharacterSwitchRequested {
    pub character: CharacterType,
}

/// Input pressed an ability key.
#[derive(Event, Debug, Clone, Reflect)]
pub struct AbilityActivationRequested {
    pub slot: AbilitySlot,
}

#[derive(Event, Debug, Clone, Default, Reflect)]
#[reflect(Default)]
pub struct PlayerDamaged {
    pub amount: u32,
}

#[derive(Event, Debug, Clone, Default, Reflect)]
#[reflect(Default)]
pub struct PlayerHealed {
    pub amount: u32,
}

/// Emitted when a request above was refused, for UI feedback.
#[derive(Event, Debug, Clone)]
pub struct ActionRejected {
    /// Name of the refused action, e.g. "unlock_character"
    pub action: &'static str,
    pub reason: Rejection,
}
