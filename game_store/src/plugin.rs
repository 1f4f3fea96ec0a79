use {
    crate::{GameStore, systems},
    bevy::prelude::*,
    character_components::CharacterComponentsPlugin,
    progress_events::ProgressEventsPlugin,
    save_load::SaveConfig,
    skill_components::SkillComponentsPlugin,
};

/// Wires the store into a Bevy app.
///
/// Inserts a file-backed [`GameStore`] unless one is already present, ticks
/// ability cooldowns once per frame from [`Time`], turns collaborator events
/// into store actions and saves on exit.
#[derive(Default)]
pub struct GameStorePlugin {
    pub save: SaveConfig,
}

impl Plugin for GameStorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CharacterComponentsPlugin,
            SkillComponentsPlugin,
            ProgressEventsPlugin,
        ));

        if !app.world().contains_resource::<GameStore>() {
            app.insert_resource(GameStore::from_config(&self.save));
        }

        app.add_systems(Update, systems::tick_ability_cooldowns)
            .add_systems(Last, systems::save_on_exit)
            .add_observer(systems::on_souls_collected)
            .add_observer(systems::on_enemy_defeated)
            .add_observer(systems::on_character_unlock_requested)
            .add_observer(systems::on_skill_purchase_requested)
            .add_observer(systems::on_character_switch_requested)
            .add_observer(systems::on_ability_activation_requested)
            .add_observer(systems::on_player_damaged)
            .add_observer(systems::on_player_healed);
    }
}
