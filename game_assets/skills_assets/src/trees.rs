use {
    crate::{SkillDefinition, SkillEffect, SkillTree},
    character_components::CharacterType,
};

pub static SWORD_TREE: SkillTree = SkillTree {
    character: CharacterType::Sword,
    skills: &[
        // Tier 1
        SkillDefinition {
            id: "sword_basic",
            character: CharacterType::Sword,
            tier: 1,
            name: "基本斬撃強化",
            description: "通常攻撃のダメージ+20%",
            cost: 10,
            requires: &[],
            effect: SkillEffect::Damage(1.2),
        },
        SkillDefinition {
            id: "sword_speed",
            character: CharacterType::Sword,
            tier: 1,
            name: "抜刀術",
            description: "攻撃速度+15%",
            cost: 15,
            requires: &[],
            effect: SkillEffect::Speed(1.15),
        },
        // Tier 2
        SkillDefinition {
            id: "sword_combo",
            character: CharacterType::Sword,
            tier: 2,
            name: "三連斬",
            description: "連続攻撃が可能に",
            cost: 25,
            requires: &["sword_basic"],
            effect: SkillEffect::Special(3.0),
        },
        SkillDefinition {
            id: "sword_iai",
            character: CharacterType::Sword,
            tier: 2,
            name: "居合",
            description: "溜め攻撃で大ダメージ",
            cost: 30,
            requires: &["sword_speed"],
            effect: SkillEffect::Damage(2.0),
        },
        // Tier 3
        SkillDefinition {
            id: "sword_ultimate",
            character: CharacterType::Sword,
            tier: 3,
            name: "奥義・月光",
            description: "範囲攻撃の必殺技",
            cost: 50,
            requires: &["sword_combo", "sword_iai"],
            effect: SkillEffect::Special(100.0),
        },
    ],
};

pub static GUN_TREE: SkillTree = SkillTree {
    character: CharacterType::Gun,
    skills: &[
        SkillDefinition {
            id: "gun_basic",
            character: CharacterType::Gun,
            tier: 1,
            name: "霊弾強化",
            description: "弾のダメージ+20%",
            cost: 10,
            requires: &[],
            effect: SkillEffect::Damage(1.2),
        },
        SkillDefinition {
            id: "gun_reload",
            character: CharacterType::Gun,
            tier: 1,
            name: "高速リロード",
            description: "リロード速度+30%",
            cost: 15,
            requires: &[],
            effect: SkillEffect::Speed(1.3),
        },
        SkillDefinition {
            id: "gun_rapid",
            character: CharacterType::Gun,
            tier: 2,
            name: "連射",
            description: "連続射撃が可能に",
            cost: 25,
            requires: &["gun_basic"],
            effect: SkillEffect::Special(5.0),
        },
        SkillDefinition {
            id: "gun_pierce",
            character: CharacterType::Gun,
            tier: 2,
            name: "貫通弾",
            description: "敵を貫通する弾",
            cost: 30,
            requires: &["gun_reload"],
            effect: SkillEffect::Special(1.0),
        },
        SkillDefinition {
            id: "gun_ultimate",
            character: CharacterType::Gun,
            tier: 3,
            name: "奥義・破魔光線",
            description: "強力なビーム攻撃",
            cost: 50,
            requires: &["gun_rapid", "gun_pierce"],
            effect: SkillEffect::Special(100.0),
        },
    ],
};

pub static MAGIC_TREE: SkillTree = SkillTree {
    character: CharacterType::Magic,
    skills: &[
        SkillDefinition {
            id: "magic_basic",
            character: CharacterType::Magic,
            tier: 1,
            name: "霊力増幅",
            description: "術のダメージ+20%",
            cost: 10,
            requires: &[],
            effect: SkillEffect::Damage(1.2),
        },
        SkillDefinition {
            id: "magic_range",
            character: CharacterType::Magic,
            tier: 1,
            name: "術式拡大",
            description: "攻撃範囲+30%",
            cost: 15,
            requires: &[],
            effect: SkillEffect::Special(1.3),
        },
        SkillDefinition {
            id: "magic_fire",
            character: CharacterType::Magic,
            tier: 2,
            name: "火炎術",
            description: "炎の範囲攻撃",
            cost: 25,
            requires: &["magic_basic"],
            effect: SkillEffect::Damage(1.5),
        },
        SkillDefinition {
            id: "magic_barrier",
            character: CharacterType::Magic,
            tier: 2,
            name: "結界術",
            description: "ダメージを軽減する結界",
            cost: 30,
            requires: &["magic_range"],
            effect: SkillEffect::Defense(0.7),
        },
        SkillDefinition {
            id: "magic_ultimate",
            character: CharacterType::Magic,
            tier: 3,
            name: "奥義・天誅",
            description: "天からの裁きを下す",
            cost: 50,
            requires: &["magic_fire", "magic_barrier"],
            effect: SkillEffect::Special(100.0),
        },
    ],
};

pub static FIST_TREE: SkillTree = SkillTree {
    character: CharacterType::Fist,
    skills: &[
        SkillDefinition {
            id: "fist_basic",
            character: CharacterType::Fist,
            tier: 1,
            name: "拳圧強化",
            description: "打撃ダメージ+20%",
            cost: 10,
            requires: &[],
            effect: SkillEffect::Damage(1.2),
        },
        SkillDefinition {
            id: "fist_speed",
            character: CharacterType::Fist,
            tier: 1,
            name: "疾風",
            description: "移動速度+20%",
            cost: 15,
            requires: &[],
            effect: SkillEffect::Speed(1.2),
        },
        SkillDefinition {
            id: "fist_combo",
            character: CharacterType::Fist,
            tier: 2,
            name: "連撃",
            description: "5連続コンボが可能に",
            cost: 25,
            requires: &["fist_basic"],
            effect: SkillEffect::Special(5.0),
        },
        SkillDefinition {
            id: "fist_counter",
            character: CharacterType::Fist,
            tier: 2,
            name: "カウンター",
            description: "敵の攻撃を弾き返す",
            cost: 30,
            requires: &["fist_speed"],
            effect: SkillEffect::Special(1.0),
        },
        SkillDefinition {
            id: "fist_ultimate",
            character: CharacterType::Fist,
            tier: 3,
            name: "奥義・羅刹拳",
            description: "怒涛の連撃を叩き込む",
            cost: 50,
            requires: &["fist_combo", "fist_counter"],
            effect: SkillEffect::Special(100.0),
        },
    ],
};
