#![allow(dead_code)]

use gspanel::catalog::{EquipmentSlot, StatKind};
use gspanel::model::{Affix, Item};
use gspanel::provider::{CharacterMeta, ProviderTables};
use std::collections::HashMap;

pub fn affix(kind: StatKind, value: f64) -> Affix {
    Affix::new(kind, value)
}

/// A +20 item with the given main stat and substats.
pub fn item(slot: EquipmentSlot, main: (StatKind, f64), subs: &[(StatKind, f64)]) -> Item {
    Item::new(
        slot,
        affix(main.0, main.1),
        subs.iter().map(|&(k, v)| affix(k, v)).collect(),
    )
}

pub fn flower(subs: &[(StatKind, f64)]) -> Item {
    item(EquipmentSlot::Flower, (StatKind::Hp, 4780.0), subs)
}

pub fn feather(subs: &[(StatKind, f64)]) -> Item {
    item(EquipmentSlot::Feather, (StatKind::Atk, 311.0), subs)
}

/// Five crit-heavy pieces for an attack-scaling Pyro character.
pub fn crit_loadout() -> Vec<Item> {
    use StatKind::*;
    vec![
        flower(&[(CritDamage, 21.8), (CritRate, 10.5), (AtkPercent, 5.8), (Def, 16.0)]),
        feather(&[(CritRate, 7.0), (CritDamage, 14.0), (HpPercent, 9.3), (EnergyRecharge, 5.2)]),
        item(
            EquipmentSlot::Sands,
            (AtkPercent, 46.6),
            &[(CritDamage, 14.0), (CritRate, 7.0)],
        ),
        item(
            EquipmentSlot::Goblet,
            (PyroDmgBonus, 46.6),
            &[(CritRate, 6.6), (Atk, 33.0), (ElementalMastery, 40.0)],
        ),
        item(
            EquipmentSlot::Circlet,
            (CritDamage, 62.2),
            &[(CritRate, 10.5), (AtkPercent, 11.7), (Atk, 19.0), (Def, 23.0)],
        ),
    ]
}

pub fn tables() -> ProviderTables {
    let mut characters = HashMap::new();
    characters.insert(
        "10000046".to_string(),
        CharacterMeta {
            element: "Fire".to_string(),
            name: None,
            name_text_map_hash: Some("1940919994".to_string()),
            quality_type: "QUALITY_ORANGE".to_string(),
            skill_order: vec![10461, 10462, 10463],
        },
    );
    characters.insert(
        "10000099".to_string(),
        CharacterMeta {
            element: "Void".to_string(),
            name: Some("Broken".to_string()),
            ..Default::default()
        },
    );

    let text_map = HashMap::from([
        ("1940919994".to_string(), "Hu Tao".to_string()),
        ("1075647299".to_string(), "Crimson Witch of Flames".to_string()),
        ("3914045794".to_string(), "Witch's Heart Flames".to_string()),
        ("1212345779".to_string(), "Staff of Homa".to_string()),
    ]);

    let append_props = HashMap::from([
        ("501204".to_string(), "FIGHT_PROP_CRITICAL".to_string()),
        ("501224".to_string(), "FIGHT_PROP_CRITICAL_HURT".to_string()),
        ("501064".to_string(), "FIGHT_PROP_DEFENSE".to_string()),
        ("501054".to_string(), "FIGHT_PROP_ATTACK_PERCENT".to_string()),
    ]);

    ProviderTables {
        characters,
        text_map,
        append_props,
    }
}

fn relic(equip_type: &str, level: u32, main: (&str, f64), subs: &[(&str, f64)], appends: &[u64]) -> String {
    let subs: Vec<String> = subs
        .iter()
        .map(|(id, v)| format!(r#"{{"appendPropId": "{}", "statValue": {}}}"#, id, v))
        .collect();
    let appends: Vec<String> = appends.iter().map(|a| a.to_string()).collect();
    format!(
        r#"{{
            "itemId": 77534,
            "reliquary": {{"level": {level}, "appendPropIdList": [{appends}]}},
            "flat": {{
                "itemType": "ITEM_RELIQUARY",
                "equipType": "{equip_type}",
                "rankLevel": 5,
                "nameTextMapHash": "3914045794",
                "setNameTextMapHash": 1075647299,
                "reliquaryMainstat": {{"mainPropId": "{main_id}", "statValue": {main_value}}},
                "reliquarySubstats": [{subs}]
            }}
        }}"#,
        level = level,
        appends = appends.join(", "),
        equip_type = equip_type,
        main_id = main.0,
        main_value = main.1,
        subs = subs.join(", "),
    )
}

/// One showcased Hu Tao wearing four Crimson Witch pieces and a Homa.
pub fn avatar_json(avatar_id: u64) -> String {
    let relics = [
        relic(
            "EQUIP_BRACER",
            21,
            ("FIGHT_PROP_HP", 4780.0),
            &[
                ("FIGHT_PROP_CRITICAL_HURT", 21.8),
                ("FIGHT_PROP_CRITICAL", 10.5),
                ("FIGHT_PROP_ATTACK_PERCENT", 5.8),
                ("FIGHT_PROP_DEFENSE", 16.0),
            ],
            &[501204, 501224, 501064, 501054, 501224, 501224, 501204, 501064, 501064],
        ),
        relic(
            "EQUIP_NECKLACE",
            21,
            ("FIGHT_PROP_ATTACK", 311.0),
            &[("FIGHT_PROP_CRITICAL", 7.0), ("FIGHT_PROP_CRITICAL_HURT", 14.0)],
            &[],
        ),
        relic(
            "EQUIP_SHOES",
            17,
            ("FIGHT_PROP_HP_PERCENT", 38.7),
            &[("FIGHT_PROP_CRITICAL_HURT", 14.0)],
            &[],
        ),
        relic(
            "EQUIP_RING",
            21,
            ("FIGHT_PROP_FIRE_ADD_HURT", 46.6),
            &[("FIGHT_PROP_CRITICAL", 6.6)],
            &[],
        ),
    ];

    format!(
        r#"{{
            "avatarId": {avatar_id},
            "propMap": {{"4001": {{"type": 4001, "ival": "0", "val": "90"}}}},
            "fightPropMap": {{
                "1": 15552.3, "4": 106.4, "5": 311.0, "6": 0.466, "7": 876.2,
                "2000": 33000.0, "2002": 1000.0,
                "20": 0.7, "22": 2.2, "23": 1.2, "26": 0.0, "28": 120.0,
                "30": 0.0, "40": 0.616, "41": 0.0, "42": 0.0, "43": 0.0,
                "44": 0.0, "45": 0.0, "46": 0.0
            }},
            "talentIdList": [461, 462],
            "fetterInfo": {{"expLevel": 10}},
            "skillLevelMap": {{"10461": 9, "10462": 10, "10463": 8}},
            "proudSkillExtraLevelMap": {{"4639": 3}},
            "equipList": [
                {relics},
                {{
                    "itemId": 13501,
                    "weapon": {{"level": 90, "affixMap": {{"113501": 0}}}},
                    "flat": {{
                        "itemType": "ITEM_WEAPON",
                        "rankLevel": 5,
                        "nameTextMapHash": "1212345779",
                        "weaponStats": [
                            {{"appendPropId": "FIGHT_PROP_BASE_ATTACK", "statValue": 608}},
                            {{"appendPropId": "FIGHT_PROP_CRITICAL_HURT", "statValue": 66.2}}
                        ]
                    }}
                }}
            ]
        }}"#,
        avatar_id = avatar_id,
        relics = relics.join(",\n"),
    )
}

/// A full snapshot listing the given avatars.
pub fn showcase_json(avatar_ids: &[u64]) -> String {
    let avatars: Vec<String> = avatar_ids.iter().map(|id| avatar_json(*id)).collect();
    let shown: Vec<String> = avatar_ids
        .iter()
        .map(|id| format!(r#"{{"avatarId": {}, "level": 90}}"#, id))
        .collect();
    format!(
        r#"{{
            "uid": "100000001",
            "playerInfo": {{
                "nickname": "Traveler",
                "level": 60,
                "showAvatarInfoList": [{}]
            }},
            "avatarInfoList": [{}]
        }}"#,
        shown.join(", "),
        avatars.join(", ")
    )
}
