//! Observable owner of the game snapshot.
//!
//! [`GameStore`] is the only place the snapshot is mutated. Each action
//! clones the current snapshot, applies one engine operation to the copy and,
//! if anything changed, swaps it in, notifies subscribers and saves when a
//! persisted field moved. Rejected actions return the reason and leave the
//! snapshot, subscribers and storage untouched.

mod plugin;
pub mod systems;


pub use plugin::GameStorePlugin;

use {
    bevy::prelude::*,
    character_components::{CharacterRecord, CharacterType, default_roster},
    game_state_resources::{ActionResult, GameSnapshot},
    save_load::{SaveConfig, SaveStorage},
    skill_components::AbilitySlot,
    skills_assets::default_ability_state,
    std::{collections::HashSet, sync::Arc},
};

type Listener = Box<dyn Fn(&GameSnapshot) + Send + Sync>;

/// Handle returned by [`GameStore::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

#[derive(Resource)]
pub struct GameStore {
    current: Arc<GameSnapshot>,
    storage: Box<dyn SaveStorage>,
    save_key: String,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
}

impl GameStore {
    /// Builds the store from defaults merged with whatever `storage` holds
    /// under `save_key`.
    pub fn new(storage: impl SaveStorage + 'static, save_key: impl Into<String>) -> Self {
        let save_key = save_key.into();
        let snapshot = match save_load::load(&storage, &save_key) {
            Some(saved) => {
                reconcile_loaded(save_load::merge_defaults(GameSnapshot::default(), saved))
            }
            None => GameSnapshot::default(),
        };
        info!(
            character = %snapshot.current_character,
            souls = snapshot.progression.souls,
            "Game store initialized"
        );

        Self {
            current: Arc::new(snapshot),
            storage: Box::new(storage),
            save_key,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// File-backed store at the configured location.
    pub fn from_config(config: &SaveConfig) -> Self {
        Self::new(config.file_storage(), config.key.clone())
    }

    /// Shared handle to the current snapshot. Stays valid after later
    /// actions replace it.
    pub fn snapshot(&self) -> Arc<GameSnapshot> {
        Arc::clone(&self.current)
    }

    pub fn state(&self) -> &GameSnapshot {
        &self.current
    }

    pub fn save_key(&self) -> &str {
        &self.save_key
    }

    /// Registers `listener`, called synchronously after every committed change.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: Fn(&GameSnapshot) + Send + Sync + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    // === Progression ===

    pub fn add_souls(&mut self, amount: u32) -> ActionResult {
        self.commit("add_souls", |s| progression::add_souls(s, amount))
    }

    pub fn defeat_enemy(&mut self) -> ActionResult {
        self.commit("defeat_enemy", progression::defeat_enemy)
    }

    /// A kill and its soul drop as one change: one notification, one save.
    pub fn defeat_enemy_with_drop(&mut self, souls: u32) -> ActionResult {
        self.commit("defeat_enemy_with_drop", |s| {
            progression::defeat_enemy(s)?;
            progression::add_souls(s, souls)
        })
    }

    pub fn unlock_character(&mut self, character: CharacterType, cost: u32) -> ActionResult {
        self.commit("unlock_character", |s| {
            progression::unlock_character(s, character, cost)
        })
    }

    pub fn unlock_skill(&mut self, skill_id: &str, cost: u32) -> ActionResult {
        self.commit("unlock_skill", |s| progression::unlock_skill(s, skill_id, cost))
    }

    pub fn purchase_skill(&mut self, skill_id: &str) -> ActionResult {
        self.commit("purchase_skill", |s| progression::purchase_skill(s, skill_id))
    }

    pub fn switch_character(&mut self, character: CharacterType) -> ActionResult {
        self.commit("switch_character", |s| {
            progression::switch_character(s, character)
        })
    }

    // === Combat abilities ===

    pub fn use_skill(&mut self, slot: AbilitySlot) -> ActionResult {
        self.commit("use_skill", |s| skills::use_skill(s, slot))
    }

    /// Frame tick. Notifies only when a timer actually moved.
    pub fn update_cooldowns(&mut self, delta: f32) -> ActionResult {
        self.commit("update_cooldowns", |s| skills::update_cooldowns(s, delta))
    }

    pub fn add_ult_charge(&mut self, amount: u32) -> ActionResult {
        self.commit("add_ult_charge", |s| skills::add_ult_charge(s, amount))
    }

    // === Player avatar ===

    pub fn take_damage(&mut self, amount: u32) -> ActionResult {
        self.commit("take_damage", |s| {
            s.player.take_damage(amount);
            Ok(())
        })
    }

    pub fn heal(&mut self, amount: u32) -> ActionResult {
        self.commit("heal", |s| {
            s.player.heal(amount);
            Ok(())
        })
    }

    pub fn set_player_transform(&mut self, position: Vec3, rotation: f32) -> ActionResult {
        self.commit("set_player_transform", |s| {
            s.player.position = position;
            s.player.rotation = rotation;
            Ok(())
        })
    }

    pub fn set_attacking(&mut self, is_attacking: bool) -> ActionResult {
        self.commit("set_attacking", |s| {
            s.player.is_attacking = is_attacking;
            Ok(())
        })
    }

    // === Persistence control ===

    /// Writes the persisted subset now. Failures are logged by `save_load`.
    pub fn save(&self) {
        save_load::save(self.storage.as_ref(), &self.save_key, &self.current);
    }

    /// Back to a fresh game: defaults in memory, saved progress deleted.
    pub fn reset_all(&mut self) {
        save_load::clear(self.storage.as_ref(), &self.save_key);
        self.current = Arc::new(GameSnapshot::default());
        info!("Progress reset to defaults");
        self.notify();
    }

    /// Final save, then drops every subscriber with the store.
    pub fn dispose(mut self) {
        self.save();
        self.listeners.clear();
        info!("Game store disposed");
    }

    fn commit<F>(&mut self, action: &'static str, apply: F) -> ActionResult
    where
        F: FnOnce(&mut GameSnapshot) -> ActionResult,
    {
        let mut candidate = GameSnapshot::clone(&self.current);
        if let Err(rejection) = apply(&mut candidate) {
            debug!(action, reason = %rejection, "Action rejected");
            return Err(rejection);
        }
        if candidate == *self.current {
            return Ok(());
        }

        let persist = !candidate.same_persisted_fields(&self.current);
        self.current = Arc::new(candidate);
        self.notify();
        if persist {
            self.save();
        }
        Ok(())
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(self.current.as_ref());
        }
    }
}

/// Repairs a merged save: records get `level >= 1` and unique skill ids,
/// the selected character is playable, and the ability state matches the
/// selected character's kit.
fn reconcile_loaded(mut snapshot: GameSnapshot) -> GameSnapshot {
    for (character, record) in &mut snapshot.characters {
        if record.level == 0 {
            warn!(%character, "Saved level 0 raised to 1");
            record.level = 1;
        }

        let mut seen = HashSet::new();
        let before = record.unlocked_skills.len();
        record.unlocked_skills.retain(|id| seen.insert(id.clone()));
        if record.unlocked_skills.len() != before {
            warn!(
                %character,
                removed = before - record.unlocked_skills.len(),
                "Dropped duplicate saved skills"
            );
        }
    }

    if !snapshot.is_unlocked(snapshot.current_character) {
        let fallback = CharacterType::ALL
            .into_iter()
            .find(|character| snapshot.is_unlocked(*character));

        let character = match fallback {
            Some(character) => character,
            None => {
                let character = CharacterType::default();
                let record = default_roster()
                    .remove(&character)
                    .unwrap_or_else(|| CharacterRecord::new(character.id(), "#ffffff", true));
                // Keep any saved skills for the record we are re-enabling
                snapshot.characters.entry(character).or_insert(record).unlocked = true;
                character
            }
        };
        warn!(
            saved = %snapshot.current_character,
            selected = %character,
            "Saved character is not playable, falling back"
        );
        snapshot.current_character = character;
    }

    snapshot.abilities = default_ability_state(snapshot.current_character);
    snapshot
}
