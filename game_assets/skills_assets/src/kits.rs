use {
    crate::{AbilityKit, SlotAbility},
    character_components::CharacterType,
};

pub static SWORD_KIT: AbilityKit = AbilityKit {
    character: CharacterType::Sword,
    q: SlotAbility {
        name: "斬撃",
        cooldown: 8.0,
    },
    e: SlotAbility {
        name: "居合",
        cooldown: 12.0,
    },
    r: SlotAbility {
        name: "奥義・月光",
        cooldown: 0.0,
    },
};

pub static GUN_KIT: AbilityKit = AbilityKit {
    character: CharacterType::Gun,
    q: SlotAbility {
        name: "霊弾",
        cooldown: 6.0,
    },
    e: SlotAbility {
        name: "連射",
        cooldown: 10.0,
    },
    r: SlotAbility {
        name: "奥義・破魔光線",
        cooldown: 0.0,
    },
};

pub static MAGIC_KIT: AbilityKit = AbilityKit {
    character: CharacterType::Magic,
    q: SlotAbility {
        name: "火炎術",
        cooldown: 10.0,
    },
    e: SlotAbility {
        name: "結界",
        cooldown: 15.0,
    },
    r: SlotAbility {
        name: "奥義・天誅",
        cooldown: 0.0,
    },
};

pub static FIST_KIT: AbilityKit = AbilityKit {
    character: CharacterType::Fist,
    q: SlotAbility {
        name: "連撃",
        cooldown: 5.0,
    },
    e: SlotAbility {
        name: "気功",
        cooldown: 9.0,
    },
    r: SlotAbility {
        name: "奥義・羅刹拳",
        cooldown: 0.0,
    },
};
