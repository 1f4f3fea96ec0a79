use {bevy::prelude::*, std::fmt};

/// Upper bound of the ultimate-charge resource.
pub const ULTIMATE_CHARGE_MAX: u32 = 100;

pub struct SkillComponentsPlugin;

impl Plugin for SkillComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AbilitySlot>()
            .register_type::<SlotCooldown>()
            .register_type::<ActiveSkill>();
    }
}

/// Ability input binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AbilitySlot {
    Q,
    E,
    /// Ultimate, gated by charge instead of a timer.
    R,
}

impl AbilitySlot {
    pub const ALL: [AbilitySlot; 3] = [AbilitySlot::Q, AbilitySlot::E, AbilitySlot::R];

    pub fn key(self) -> &'static str {
        match self {
            AbilitySlot::Q => "q",
            AbilitySlot::E => "e",
            AbilitySlot::R => "r",
        }
    }
}

impl fmt::Display for AbilitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AbilitySlot::Q => "Q",
            AbilitySlot::E => "E",
            AbilitySlot::R => "R",
        })
    }
}

/// Cooldown of one slot, in seconds. `remaining <= total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Default)]
pub struct SlotCooldown {
    pub remaining: f32,
    pub total: f32,
}

impl SlotCooldown {
    /// Ready cooldown of the given length.
    pub fn ready(total: f32) -> Self {
        Self {
            remaining: 0.0,
            total: total.max(0.0),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// READY -> COOLING.
    pub fn start(&mut self) {
        self.remaining = self.total;
    }

    /// Advances the timer; returns whether `remaining` changed.
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining = (self.remaining - delta).max(0.0);
        true
    }
}

/// The ability currently resolving.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct ActiveSkill {
    /// `<character>_<slot>`, e.g. `sword_q`.
    pub id: String,
    pub name: String,
    pub remaining_duration: f32,
}

impl ActiveSkill {
    /// Counts the duration down; returns `false` once it has expired.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.remaining_duration -= delta;
        self.remaining_duration > 0.0
    }
}

/// Combat ability state of the selected character.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AbilityState {
    pub q: SlotCooldown,
    pub e: SlotCooldown,
    pub r: SlotCooldown,
    pub active_skill: Option<ActiveSkill>,
    /// Always within `0..=ULTIMATE_CHARGE_MAX`.
    pub ultimate_charge: u32,
}

impl AbilityState {
    pub fn cooldown(&self, slot: AbilitySlot) -> &SlotCooldown {
        match slot {
            AbilitySlot::Q => &self.q,
            AbilitySlot::E => &self.e,
            AbilitySlot::R => &self.r,
        }
    }

    pub fn cooldown_mut(&mut self, slot: AbilitySlot) -> &mut SlotCooldown {
        match slot {
            AbilitySlot::Q => &mut self.q,
            AbilitySlot::E => &mut self.e,
            AbilitySlot::R => &mut self.r,
        }
    }

    pub fn add_charge(&mut self, amount: u32) {
        self.ultimate_charge = self
            .ultimate_charge
            .saturating_add(amount)
            .min(ULTIMATE_CHARGE_MAX);
    }

    pub fn is_ultimate_charged(&self) -> bool {
        self.ultimate_charge >= ULTIMATE_CHARGE_MAX
    }
}
