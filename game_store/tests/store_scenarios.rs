use {
    bevy::math::Vec3,
    character_components::CharacterType,
    game_state_resources::{GameSnapshot, Rejection},
    game_store::GameStore,
    save_load::{MemoryStorage, SaveStorage, SavedProgress},
    skill_components::AbilitySlot,
    std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

const KEY: &str = "soul_progress";

fn fresh_store() -> (GameStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    (GameStore::new(storage.clone(), KEY), storage)
}

fn saved(storage: &MemoryStorage) -> SavedProgress {
    let raw = storage.get(KEY).expect("progress should be saved");
    serde_json::from_str(&raw).expect("saved progress should parse")
}

fn count_notifications(store: &mut GameStore) -> Arc<AtomicUsize> {
    let counter = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&counter);
    store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    counter
}

#[test]
fn scenario_unlock_gun_without_souls_is_rejected() {
    let (mut store, storage) = fresh_store();

    let result = store.unlock_character(CharacterType::Gun, 50);

    assert_eq!(
        result,
        Err(Rejection::InsufficientSouls {
            required: 50,
            available: 0
        })
    );
    assert_eq!(store.state().progression.souls, 0);
    assert!(!store.state().is_unlocked(CharacterType::Gun));
    assert!(storage.get(KEY).is_none());
}

#[test]
fn scenario_unlock_gun_with_enough_souls_is_persisted() {
    let (mut store, storage) = fresh_store();
    store.add_souls(60).unwrap();

    store
        .unlock_character(CharacterType::Gun, CharacterType::Gun.unlock_cost())
        .unwrap();

    assert_eq!(store.state().progression.souls, 10);
    assert!(store.state().is_unlocked(CharacterType::Gun));

    let persisted = saved(&storage);
    assert_eq!(persisted.souls, Some(10));
    assert_eq!(persisted.total_souls, Some(60));
    let characters = persisted.characters.unwrap();
    assert!(characters[&CharacterType::Gun].unlocked);
}

#[test]
fn scenario_q_cooldown_and_active_skill_expiry() {
    let (mut store, _) = fresh_store();
    assert_eq!(store.state().abilities.q.remaining, 0.0);
    assert_eq!(store.state().abilities.q.total, 8.0);

    store.use_skill(AbilitySlot::Q).unwrap();
    let active = store.state().abilities.active_skill.clone().unwrap();
    assert_eq!(store.state().abilities.q.remaining, 8.0);
    assert_eq!(active.id, "sword_q");
    assert_eq!(active.remaining_duration, 2.0);

    store.update_cooldowns(3.0).unwrap();
    assert_eq!(store.state().abilities.q.remaining, 5.0);
    assert!(store.state().abilities.active_skill.is_none());
}

#[test]
fn scenario_defeat_enemy_clamps_charge_at_100() {
    let (mut store, _) = fresh_store();
    store.add_ult_charge(85).unwrap();

    store.defeat_enemy().unwrap();

    assert_eq!(store.state().abilities.ultimate_charge, 100);
}

#[test]
fn scenario_ultimate_spends_full_charge() {
    let (mut store, _) = fresh_store();
    store.add_ult_charge(100).unwrap();

    store.use_skill(AbilitySlot::R).unwrap();

    assert_eq!(store.state().abilities.ultimate_charge, 0);
    let active = store.state().abilities.active_skill.clone().unwrap();
    assert_eq!(active.id, format!("{}_r", store.state().current_character));
    assert_eq!(active.remaining_duration, 3.0);

    assert_eq!(
        store.use_skill(AbilitySlot::R),
        Err(Rejection::UltimateNotCharged { charge: 0 })
    );
}

#[test]
fn test_enemy_drop_is_a_single_change() {
    let (mut store, storage) = fresh_store();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |snapshot: &GameSnapshot| {
        let progression = &snapshot.progression;
        sink.lock()
            .unwrap()
            .push((progression.enemies_defeated, progression.souls));
    });

    store.defeat_enemy_with_drop(7).unwrap();
    store.defeat_enemy_with_drop(7).unwrap();

    // Never a kill counted without its souls
    assert_eq!(*seen.lock().unwrap(), vec![(1, 7), (2, 14)]);
    assert_eq!(store.state().abilities.ultimate_charge, 30);
    let persisted = saved(&storage);
    assert_eq!(persisted.enemies_defeated, Some(2));
    assert_eq!(persisted.souls, Some(14));
}

#[test]
fn test_subscribers_see_each_committed_change() {
    let (mut store, _) = fresh_store();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |snapshot: &GameSnapshot| {
        sink.lock().unwrap().push(snapshot.progression.souls);
    });

    store.add_souls(5).unwrap();
    store.add_souls(7).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![5, 12]);
}

#[test]
fn test_no_notification_without_change() {
    let (mut store, storage) = fresh_store();
    let notifications = count_notifications(&mut store);

    // Rejected
    assert!(store.switch_character(CharacterType::Fist).is_err());
    assert!(store.use_skill(AbilitySlot::R).is_err());
    // Accepted but changes nothing
    store.add_souls(0).unwrap();
    store.update_cooldowns(0.5).unwrap();
    store.heal(10).unwrap();

    assert_eq!(notifications.load(Ordering::SeqCst), 0);
    assert!(storage.get(KEY).is_none());
}

#[test]
fn test_ticks_notify_until_everything_is_ready() {
    let (mut store, _) = fresh_store();
    store.use_skill(AbilitySlot::Q).unwrap();
    let notifications = count_notifications(&mut store);

    for _ in 0..20 {
        store.update_cooldowns(1.0).unwrap();
    }

    // Q needs 8 ticks to reach zero; everything after is silent
    assert_eq!(notifications.load(Ordering::SeqCst), 8);
    assert!(store.state().abilities.q.is_ready());
}

#[test]
fn test_combat_actions_are_not_persisted() {
    let (mut store, storage) = fresh_store();

    store.use_skill(AbilitySlot::Q).unwrap();
    store.update_cooldowns(1.0).unwrap();
    store.add_ult_charge(50).unwrap();
    store.take_damage(25).unwrap();

    assert!(storage.get(KEY).is_none());
}

#[test]
fn test_player_setters_notify_without_saving() {
    let (mut store, storage) = fresh_store();
    let notifications = count_notifications(&mut store);

    store
        .set_player_transform(Vec3::new(3.0, 0.0, -2.0), 1.5)
        .unwrap();
    store.set_attacking(true).unwrap();
    store.set_attacking(true).unwrap();

    let player = &store.state().player;
    assert_eq!(player.position, Vec3::new(3.0, 0.0, -2.0));
    assert_eq!(player.rotation, 1.5);
    assert!(player.is_attacking);
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
    assert!(storage.get(KEY).is_none());
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let (mut store, _) = fresh_store();
    let counter = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&counter);
    let subscription = store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    store.add_souls(1).unwrap();
    assert!(store.unsubscribe(subscription));
    assert!(!store.unsubscribe(subscription));
    store.add_souls(1).unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn test_snapshot_handles_are_immutable() {
    let (mut store, _) = fresh_store();
    let before = store.snapshot();

    store.add_souls(30).unwrap();

    assert_eq!(before.progression.souls, 0);
    assert_eq!(store.snapshot().progression.souls, 30);
}

#[test]
fn test_progress_survives_reload() {
    let (mut store, storage) = fresh_store();
    store.add_souls(300).unwrap();
    store.unlock_character(CharacterType::Magic, 100).unwrap();
    store.switch_character(CharacterType::Magic).unwrap();
    store.purchase_skill("magic_basic").unwrap();
    store.purchase_skill("magic_fire").unwrap();
    for _ in 0..3 {
        store.defeat_enemy().unwrap();
    }
    let before = store.snapshot();
    store.dispose();

    let reloaded = GameStore::new(storage, KEY);

    assert!(reloaded.state().same_persisted_fields(&before));
    // Session state starts over, with the reloaded character's kit
    assert_eq!(reloaded.state().abilities.ultimate_charge, 0);
    assert_eq!(reloaded.state().abilities.q.total, 10.0);
    assert_eq!(reloaded.state().player, before.player);
}

#[test]
fn test_reset_all_restores_defaults_and_clears_save() {
    let (mut store, storage) = fresh_store();
    store.add_souls(80).unwrap();
    assert!(storage.get(KEY).is_some());
    let notifications = count_notifications(&mut store);

    store.reset_all();

    assert_eq!(*store.state(), GameSnapshot::default());
    assert!(storage.get(KEY).is_none());
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
}

#[test]
fn test_manual_save_writes_current_progress() {
    let (mut store, storage) = fresh_store();
    store.add_ult_charge(10).unwrap();
    assert!(storage.get(KEY).is_none());

    store.save();

    assert_eq!(saved(&storage), SavedProgress::from(store.state()));
}

#[test]
fn test_corrupt_save_starts_fresh() {
    let storage = MemoryStorage::new();
    storage.write(KEY, "not json at all").unwrap();

    let store = GameStore::new(storage.clone(), KEY);

    assert_eq!(*store.state(), GameSnapshot::default());
    assert_eq!(storage.keys().len(), 2, "corrupt save is backed up");
}

#[test]
fn test_locked_saved_character_falls_back_to_playable_one() {
    let storage = MemoryStorage::new();
    storage
        .write(KEY, r#"{"souls": 20, "currentCharacter": "fist"}"#)
        .unwrap();

    let store = GameStore::new(storage, KEY);

    assert_eq!(store.state().progression.souls, 20);
    assert_eq!(store.state().current_character, CharacterType::Sword);
    assert!(store.state().is_unlocked(store.state().current_character));
}

#[test]
fn test_saved_roster_replaces_defaults_wholesale() {
    let storage = MemoryStorage::new();
    storage
        .write(
            KEY,
            r##"{
                "currentCharacter": "gun",
                "characters": {
                    "gun": { "name": "銃使い", "unlocked": true, "level": 4,
                             "unlockedSkills": ["gun_basic"], "color": "#42a5f5" }
                }
            }"##,
        )
        .unwrap();

    let mut store = GameStore::new(storage, KEY);

    assert_eq!(store.state().current_character, CharacterType::Gun);
    assert_eq!(store.state().characters.len(), 1);
    assert_eq!(store.state().abilities.q.total, 6.0);
    assert_eq!(
        store.switch_character(CharacterType::Sword),
        Err(Rejection::UnknownCharacter(CharacterType::Sword))
    );
}

#[test]
fn test_saved_records_are_normalized_on_load() {
    let storage = MemoryStorage::new();
    storage
        .write(
            KEY,
            r##"{
                "characters": {
                    "sword": { "name": "刀使い", "unlocked": true, "level": 0,
                               "unlockedSkills": ["sword_basic", "sword_combo", "sword_basic"],
                               "color": "#e53935" },
                    "gun": { "name": "銃使い", "unlocked": false, "level": 2,
                             "unlockedSkills": [], "color": "#42a5f5" }
                }
            }"##,
        )
        .unwrap();

    let mut store = GameStore::new(storage, KEY);

    let sword = store.state().character(CharacterType::Sword).unwrap();
    assert_eq!(sword.level, 1);
    assert_eq!(
        sword.unlocked_skills,
        vec!["sword_basic".to_string(), "sword_combo".to_string()]
    );
    assert_eq!(
        store.state().character(CharacterType::Gun).unwrap().level,
        2
    );

    // The repaired record still refuses a second purchase
    store.add_souls(100).unwrap();
    assert_eq!(
        store.purchase_skill("sword_basic"),
        Err(Rejection::SkillAlreadyUnlocked("sword_basic".to_string()))
    );
}
