use {
    bevy::{log::LogPlugin, prelude::*},
    game_store::{GameStore, GameStorePlugin},
    save_load::SaveConfig,
};

fn main() {
    App::new()
        .add_plugins((
            MinimalPlugins,
            LogPlugin {
                filter: "error,soul_hunter=info,\
                    game_store=debug,\
                    progression=info,\
                    skills=debug,\
                    save_load=trace"
                    .into(),
                level: bevy::log::Level::TRACE,
                ..Default::default()
            },
        ))
        .add_plugins(GameStorePlugin {
            save: SaveConfig::default(),
        })
        .add_systems(Startup, log_progress)
        .run();
}

fn log_progress(mut store: ResMut<GameStore>) {
    let state = store.state();
    info!(
        character = %state.current_character,
        souls = state.progression.souls,
        enemies_defeated = state.progression.enemies_defeated,
        stage = %state.progression.current_stage,
        "Progress loaded"
    );

    store.subscribe(|snapshot| {
        trace!(
            souls = snapshot.progression.souls,
            ultimate_charge = snapshot.abilities.ultimate_charge,
            "Snapshot updated"
        );
    });
}
