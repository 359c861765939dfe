use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every stat the scorer knows about.
///
/// Curated rule tables historically use Chinese stat names, so each variant
/// also accepts that spelling when deserialized.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    #[serde(alias = "生命值")]
    Hp,
    #[serde(alias = "攻击力")]
    Atk,
    #[serde(alias = "防御力")]
    Def,
    #[serde(alias = "生命值百分比")]
    HpPercent,
    #[serde(alias = "攻击力百分比")]
    AtkPercent,
    #[serde(alias = "防御力百分比")]
    DefPercent,
    #[serde(alias = "暴击率")]
    CritRate,
    #[serde(alias = "暴击伤害")]
    CritDamage,
    #[serde(alias = "元素精通")]
    ElementalMastery,
    #[serde(alias = "元素充能效率")]
    EnergyRecharge,
    #[serde(alias = "治疗加成")]
    HealingBonus,
    #[serde(alias = "物理伤害加成")]
    PhysicalDmgBonus,
    /// Element-agnostic damage bonus. Rules weight this; items never carry it.
    #[serde(alias = "元素伤害加成")]
    ElementalDmgBonus,
    #[serde(alias = "火元素伤害加成")]
    PyroDmgBonus,
    #[serde(alias = "水元素伤害加成")]
    HydroDmgBonus,
    #[serde(alias = "风元素伤害加成")]
    AnemoDmgBonus,
    #[serde(alias = "雷元素伤害加成")]
    ElectroDmgBonus,
    #[serde(alias = "草元素伤害加成")]
    DendroDmgBonus,
    #[serde(alias = "冰元素伤害加成")]
    CryoDmgBonus,
    #[serde(alias = "岩元素伤害加成")]
    GeoDmgBonus,
    Unknown,
}

impl StatKind {
    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Hp | Self::Atk | Self::Def)
    }

    /// Hp -> HpPercent etc. Other kinds map to themselves.
    pub fn percent_variant(&self) -> StatKind {
        match self {
            Self::Hp => Self::HpPercent,
            Self::Atk => Self::AtkPercent,
            Self::Def => Self::DefPercent,
            other => *other,
        }
    }

    /// The element of a concrete elemental damage bonus.
    pub fn element(&self) -> Option<Element> {
        match self {
            Self::PyroDmgBonus => Some(Element::Pyro),
            Self::HydroDmgBonus => Some(Element::Hydro),
            Self::AnemoDmgBonus => Some(Element::Anemo),
            Self::ElectroDmgBonus => Some(Element::Electro),
            Self::DendroDmgBonus => Some(Element::Dendro),
            Self::CryoDmgBonus => Some(Element::Cryo),
            Self::GeoDmgBonus => Some(Element::Geo),
            _ => None,
        }
    }

    pub fn is_damage_bonus(&self) -> bool {
        matches!(self, Self::PhysicalDmgBonus | Self::ElementalDmgBonus) || self.element().is_some()
    }

    /// Concrete elemental bonuses fold onto `ElementalDmgBonus`.
    pub fn generic(&self) -> StatKind {
        if self.element().is_some() {
            Self::ElementalDmgBonus
        } else {
            *self
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Atk => "ATK",
            Self::Def => "DEF",
            Self::HpPercent => "HP%",
            Self::AtkPercent => "ATK%",
            Self::DefPercent => "DEF%",
            Self::CritRate => "CRIT Rate",
            Self::CritDamage => "CRIT DMG",
            Self::ElementalMastery => "EM",
            Self::EnergyRecharge => "ER",
            Self::HealingBonus => "Healing",
            Self::PhysicalDmgBonus => "Physical DMG",
            Self::ElementalDmgBonus => "Elemental DMG",
            Self::PyroDmgBonus => "Pyro DMG",
            Self::HydroDmgBonus => "Hydro DMG",
            Self::AnemoDmgBonus => "Anemo DMG",
            Self::ElectroDmgBonus => "Electro DMG",
            Self::DendroDmgBonus => "Dendro DMG",
            Self::CryoDmgBonus => "Cryo DMG",
            Self::GeoDmgBonus => "Geo DMG",
            Self::Unknown => "?",
        }
    }

    /// Flat stats and Mastery print as whole numbers, everything else as a percentage.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Self::Hp | Self::Atk | Self::Def | Self::ElementalMastery | Self::Unknown => {
                format!("{}", value.round() as i64)
            }
            _ => format!("{:.1}%", value),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Pyro,
    Hydro,
    Anemo,
    Electro,
    Dendro,
    Cryo,
    Geo,
    /// Physical-damage dealers. Every elemental bonus is off-element for them.
    Physical,
}

impl Element {
    pub fn is_physical(&self) -> bool {
        *self == Self::Physical
    }

    /// The damage bonus this element benefits from.
    pub fn dmg_bonus(&self) -> StatKind {
        match self {
            Self::Pyro => StatKind::PyroDmgBonus,
            Self::Hydro => StatKind::HydroDmgBonus,
            Self::Anemo => StatKind::AnemoDmgBonus,
            Self::Electro => StatKind::ElectroDmgBonus,
            Self::Dendro => StatKind::DendroDmgBonus,
            Self::Cryo => StatKind::CryoDmgBonus,
            Self::Geo => StatKind::GeoDmgBonus,
            Self::Physical => StatKind::PhysicalDmgBonus,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Flower,
    Feather,
    Sands,
    Goblet,
    Circlet,
}

impl EquipmentSlot {
    /// 1-based position (Flower = 1 .. Circlet = 5).
    pub fn index(&self) -> usize {
        *self as usize + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index.checked_sub(1)?)
    }

    /// Flower and Feather carry a fixed main stat that never scores.
    pub fn has_fixed_main(&self) -> bool {
        matches!(self, Self::Flower | Self::Feather)
    }

    pub fn fixed_main(&self) -> Option<StatKind> {
        match self {
            Self::Flower => Some(StatKind::Hp),
            Self::Feather => Some(StatKind::Atk),
            _ => None,
        }
    }
}

/// Static stat tables: roll values and the legal main/sub pools.
///
/// Built once and handed to every basis build; tests may assemble their own.
#[derive(Debug, Clone)]
pub struct AttributeCatalog {
    roll_values: BTreeMap<StatKind, f64>,
    main_pools: [Vec<StatKind>; 5],
    sub_pool: Vec<StatKind>,
}

impl AttributeCatalog {
    pub fn new(
        roll_values: BTreeMap<StatKind, f64>,
        main_pools: [Vec<StatKind>; 5],
        sub_pool: Vec<StatKind>,
    ) -> Self {
        Self {
            roll_values,
            main_pools,
            sub_pool,
        }
    }

    pub fn standard() -> Self {
        use StatKind::*;

        let mut roll_values = BTreeMap::from([
            (CritRate, 3.89),
            (CritDamage, 7.77),
            (ElementalMastery, 23.31),
            (AtkPercent, 5.83),
            (HpPercent, 5.83),
            (DefPercent, 7.29),
            (EnergyRecharge, 6.48),
            (ElementalDmgBonus, 5.825),
            (PhysicalDmgBonus, 7.288),
            (HealingBonus, 4.487),
        ]);
        for element in Element::iter().filter(|e| !e.is_physical()) {
            roll_values.insert(element.dmg_bonus(), 5.825);
        }

        let main_pools = [
            vec![],
            vec![],
            vec![
                AtkPercent,
                DefPercent,
                HpPercent,
                ElementalMastery,
                EnergyRecharge,
            ],
            vec![
                AtkPercent,
                DefPercent,
                HpPercent,
                ElementalMastery,
                ElementalDmgBonus,
                PhysicalDmgBonus,
            ],
            vec![
                AtkPercent,
                DefPercent,
                HpPercent,
                ElementalMastery,
                HealingBonus,
                CritRate,
                CritDamage,
            ],
        ];

        let sub_pool = vec![
            Atk,
            AtkPercent,
            Def,
            DefPercent,
            Hp,
            HpPercent,
            ElementalMastery,
            EnergyRecharge,
            CritRate,
            CritDamage,
        ];

        Self::new(roll_values, main_pools, sub_pool)
    }

    /// Theoretical full-roll growth of a stat. Zero for kinds without a constant.
    pub fn roll_value(&self, kind: StatKind) -> f64 {
        self.roll_values.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn main_stat_pool(&self, slot: EquipmentSlot) -> &[StatKind] {
        &self.main_pools[slot.index() - 1]
    }

    pub fn sub_stat_pool(&self) -> &[StatKind] {
        &self.sub_pool
    }

    pub fn is_legal_main(&self, slot: EquipmentSlot, kind: StatKind) -> bool {
        match slot.fixed_main() {
            Some(fixed) => fixed == kind,
            None => self.main_stat_pool(slot).contains(&kind.generic()),
        }
    }

    pub fn is_sub_stat(&self, kind: StatKind) -> bool {
        self.sub_pool.contains(&kind)
    }
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
