//! Serde mirror of the showcase snapshot returned by the aggregation API.
//!
//! Only the fields the converter reads are modelled; everything else is ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Text-map hashes arrive as numbers or strings depending on the endpoint.
pub(crate) fn de_text_hash<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawShowcase {
    #[serde(default)]
    pub uid: Option<Value>,
    #[serde(default)]
    pub player_info: Option<RawPlayerInfo>,
    #[serde(default)]
    pub avatar_info_list: Option<Vec<RawAvatar>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawPlayerInfo {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub show_avatar_info_list: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawProp {
    #[serde(default)]
    pub val: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawFetter {
    #[serde(default)]
    pub exp_level: u32,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawAvatar {
    pub avatar_id: u64,
    #[serde(default)]
    pub prop_map: HashMap<String, RawProp>,
    #[serde(default)]
    pub fight_prop_map: HashMap<String, f64>,
    #[serde(default)]
    pub talent_id_list: Vec<u64>,
    #[serde(default)]
    pub fetter_info: Option<RawFetter>,
    #[serde(default)]
    pub skill_level_map: HashMap<String, u32>,
    #[serde(default)]
    pub proud_skill_extra_level_map: HashMap<String, u32>,
    #[serde(default)]
    pub equip_list: Vec<RawEquip>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawEquip {
    #[serde(default)]
    pub item_id: u64,
    #[serde(default)]
    pub reliquary: Option<RawReliquary>,
    #[serde(default)]
    pub weapon: Option<RawWeaponState>,
    pub flat: RawFlat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawReliquary {
    /// 1-based: a fresh artifact reports 1.
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub append_prop_id_list: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawWeaponState {
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub affix_map: HashMap<String, u32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawFlat {
    #[serde(default)]
    pub item_type: String,
    #[serde(default)]
    pub equip_type: Option<String>,
    #[serde(default)]
    pub rank_level: u8,
    #[serde(default, deserialize_with = "de_text_hash")]
    pub name_text_map_hash: Option<String>,
    #[serde(default, deserialize_with = "de_text_hash")]
    pub set_name_text_map_hash: Option<String>,
    #[serde(default)]
    pub reliquary_mainstat: Option<RawMainStat>,
    #[serde(default)]
    pub reliquary_substats: Vec<RawSubStat>,
    #[serde(default)]
    pub weapon_stats: Vec<RawSubStat>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawMainStat {
    pub main_prop_id: String,
    #[serde(default)]
    pub stat_value: f64,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawSubStat {
    pub append_prop_id: String,
    #[serde(default)]
    pub stat_value: f64,
}
