pub mod convert;
pub mod props;
pub mod raw;
pub mod resources;

pub use self::convert::convert_avatar;
pub use self::raw::{RawAvatar, RawShowcase};
pub use self::resources::{CharacterMeta, ProviderTables};

use crate::catalog::{Element, StatKind};
use crate::error::{GsPanelError, GsResult};
use crate::model::{Affix, BaseStats, Item};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLevel {
    /// Including constellation boosts.
    pub level: u32,
    pub base_level: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillLevels {
    pub normal: SkillLevel,
    pub skill: SkillLevel,
    pub burst: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: u64,
    pub name: String,
    pub rarity: u8,
    pub level: u32,
    /// 1..=5
    pub refinement: u8,
    pub base_attack: f64,
    pub sub: Option<Affix>,
}

/// A showcased character, normalized from the provider snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub id: u64,
    pub name: String,
    pub element: Element,
    pub rarity: u8,
    pub level: u32,
    pub constellation: u8,
    pub friendship: u32,
    pub skills: SkillLevels,
    pub base_stats: BaseStats,
    /// Panel totals. Rates are percentages, not fractions.
    pub panel_stats: BTreeMap<StatKind, f64>,
    pub weapon: Option<Weapon>,
    /// Sorted by slot.
    pub items: Vec<Item>,
    pub set_counts: BTreeMap<String, u32>,
    pub timestamp: u64,
}

impl CharacterProfile {
    pub fn panel(&self, kind: StatKind) -> f64 {
        self.panel_stats.get(&kind).copied().unwrap_or(0.0)
    }
}

pub fn parse_showcase(json: &str) -> GsResult<RawShowcase> {
    let showcase: RawShowcase = serde_json::from_str(json)?;
    Ok(showcase)
}

/// Rejects snapshots that cannot yield any character.
pub fn check_snapshot(showcase: &RawShowcase) -> GsResult<&[RawAvatar]> {
    let player = showcase.player_info.as_ref().ok_or_else(|| {
        GsPanelError::Provider(
            "snapshot is incomplete, the provider may be under maintenance".to_string(),
        )
    })?;

    let avatars = match showcase.avatar_info_list.as_deref() {
        Some(list) if !list.is_empty() => list,
        _ => {
            return Err(GsPanelError::Provider(
                "character details are hidden in the showcase".to_string(),
            ))
        }
    };

    if player
        .show_avatar_info_list
        .as_ref()
        .map_or(true, |shown| shown.is_empty())
    {
        return Err(GsPanelError::Provider(
            "no characters are placed in the showcase".to_string(),
        ));
    }

    Ok(avatars)
}

/// Set names with their active bonus size, 4-piece before 2-piece.
pub fn active_set_bonuses(set_counts: &BTreeMap<String, u32>) -> Vec<(String, u32)> {
    let mut bonuses: Vec<(String, u32)> = set_counts
        .iter()
        .filter_map(|(name, count)| match count {
            c if *c >= 4 => Some((name.clone(), 4)),
            c if *c >= 2 => Some((name.clone(), 2)),
            _ => None,
        })
        .collect();
    bonuses.sort_by(|a, b| b.1.cmp(&a.1));
    bonuses
}
