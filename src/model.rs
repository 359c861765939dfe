use crate::catalog::{EquipmentSlot, StatKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affix {
    pub kind: StatKind,
    pub value: f64,
}

impl Affix {
    pub fn new(kind: StatKind, value: f64) -> Self {
        Self { kind, value }
    }
}

/// One equipped artifact. Built fresh from a provider record, never mutated by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub slot: EquipmentSlot,
    pub main: Affix,
    #[serde(default)]
    pub subs: Vec<Affix>,
    #[serde(default = "default_rarity")]
    pub rarity: u8,
    /// Enhancement level, 0..=20.
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub name: String,
    /// Stat kinds that received each enhancement roll, oldest first.
    #[serde(default)]
    pub append_history: Vec<StatKind>,
}

fn default_rarity() -> u8 {
    5
}

impl Item {
    pub fn new(slot: EquipmentSlot, main: Affix, subs: Vec<Affix>) -> Self {
        Self {
            slot,
            main,
            subs,
            rarity: default_rarity(),
            level: 20,
            set_name: String::new(),
            name: String::new(),
            append_history: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_set(mut self, set_name: &str) -> Self {
        self.set_name = set_name.to_string();
        self
    }

    pub fn with_append_history(mut self, history: Vec<StatKind>) -> Self {
        self.append_history = history;
        self
    }

    /// The rolls that actually landed during enhancement (one per 4 levels).
    pub fn upgrade_rolls(&self) -> &[StatKind] {
        let upgrades = (self.level / 4) as usize;
        let len = self.append_history.len();
        &self.append_history[len.saturating_sub(upgrades)..]
    }
}

/// Character base stats at the current level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: f64,
    pub attack: f64,
    pub defense: f64,
}

impl BaseStats {
    pub fn new(health: f64, attack: f64, defense: f64) -> Self {
        Self {
            health,
            attack,
            defense,
        }
    }
}
