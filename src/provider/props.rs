use crate::catalog::{Element, EquipmentSlot, StatKind};

/// Maps a provider `FIGHT_PROP_*` identifier onto the catalog.
pub fn stat_from_fight_prop(id: &str) -> StatKind {
    match id {
        "FIGHT_PROP_HP" => StatKind::Hp,
        "FIGHT_PROP_ATTACK" => StatKind::Atk,
        "FIGHT_PROP_DEFENSE" => StatKind::Def,
        "FIGHT_PROP_HP_PERCENT" => StatKind::HpPercent,
        "FIGHT_PROP_ATTACK_PERCENT" => StatKind::AtkPercent,
        "FIGHT_PROP_DEFENSE_PERCENT" => StatKind::DefPercent,
        "FIGHT_PROP_CRITICAL" => StatKind::CritRate,
        "FIGHT_PROP_CRITICAL_HURT" => StatKind::CritDamage,
        "FIGHT_PROP_CHARGE_EFFICIENCY" => StatKind::EnergyRecharge,
        "FIGHT_PROP_HEAL_ADD" => StatKind::HealingBonus,
        "FIGHT_PROP_ELEMENT_MASTERY" => StatKind::ElementalMastery,
        "FIGHT_PROP_PHYSICAL_ADD_HURT" => StatKind::PhysicalDmgBonus,
        "FIGHT_PROP_FIRE_ADD_HURT" => StatKind::PyroDmgBonus,
        "FIGHT_PROP_ELEC_ADD_HURT" => StatKind::ElectroDmgBonus,
        "FIGHT_PROP_WATER_ADD_HURT" => StatKind::HydroDmgBonus,
        "FIGHT_PROP_GRASS_ADD_HURT" => StatKind::DendroDmgBonus,
        "FIGHT_PROP_WIND_ADD_HURT" => StatKind::AnemoDmgBonus,
        "FIGHT_PROP_ROCK_ADD_HURT" => StatKind::GeoDmgBonus,
        "FIGHT_PROP_ICE_ADD_HURT" => StatKind::CryoDmgBonus,
        _ => StatKind::Unknown,
    }
}

pub fn slot_from_equip_type(equip_type: &str) -> Option<EquipmentSlot> {
    match equip_type {
        "EQUIP_BRACER" => Some(EquipmentSlot::Flower),
        "EQUIP_NECKLACE" => Some(EquipmentSlot::Feather),
        "EQUIP_SHOES" => Some(EquipmentSlot::Sands),
        "EQUIP_RING" => Some(EquipmentSlot::Goblet),
        "EQUIP_DRESS" => Some(EquipmentSlot::Circlet),
        _ => None,
    }
}

/// Element names as used by the character metadata table.
pub fn element_from_provider(name: &str) -> Option<Element> {
    match name {
        "Fire" => Some(Element::Pyro),
        "Water" => Some(Element::Hydro),
        "Wind" => Some(Element::Anemo),
        "Electric" => Some(Element::Electro),
        "Grass" => Some(Element::Dendro),
        "Ice" => Some(Element::Cryo),
        "Rock" => Some(Element::Geo),
        other => other.parse().ok(),
    }
}

/// `fightPropMap` keys for the panel rates, stored as fractions.
pub const PANEL_RATE_KEYS: [(&str, StatKind); 12] = [
    ("20", StatKind::CritRate),
    ("22", StatKind::CritDamage),
    ("23", StatKind::EnergyRecharge),
    ("26", StatKind::HealingBonus),
    ("30", StatKind::PhysicalDmgBonus),
    ("40", StatKind::PyroDmgBonus),
    ("41", StatKind::ElectroDmgBonus),
    ("42", StatKind::HydroDmgBonus),
    ("43", StatKind::DendroDmgBonus),
    ("44", StatKind::AnemoDmgBonus),
    ("45", StatKind::GeoDmgBonus),
    ("46", StatKind::CryoDmgBonus),
];

pub const BASE_HP_KEY: &str = "1";
pub const BASE_ATK_KEY: &str = "4";
pub const BONUS_ATK_FLAT_KEY: &str = "5";
pub const BONUS_ATK_PERCENT_KEY: &str = "6";
pub const BASE_DEF_KEY: &str = "7";
pub const TOTAL_HP_KEY: &str = "2000";
pub const TOTAL_DEF_KEY: &str = "2002";
pub const MASTERY_KEY: &str = "28";
pub const LEVEL_PROP_KEY: &str = "4001";
