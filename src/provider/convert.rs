use super::props::{
    element_from_provider, slot_from_equip_type, stat_from_fight_prop, BASE_ATK_KEY,
    BASE_DEF_KEY, BASE_HP_KEY, BONUS_ATK_FLAT_KEY, BONUS_ATK_PERCENT_KEY, LEVEL_PROP_KEY,
    MASTERY_KEY, PANEL_RATE_KEYS, TOTAL_DEF_KEY, TOTAL_HP_KEY,
};
use super::raw::{RawAvatar, RawEquip};
use super::resources::ProviderTables;
use super::{CharacterProfile, SkillLevel, SkillLevels, Weapon};
use crate::catalog::StatKind;
use crate::error::{GsPanelError, GsResult};
use crate::model::{Affix, BaseStats, Item};
use std::collections::BTreeMap;
use tracing::debug;

const ITEM_WEAPON: &str = "ITEM_WEAPON";
const ITEM_RELIQUARY: &str = "ITEM_RELIQUARY";
const BASE_ATTACK_PROP: &str = "FIGHT_PROP_BASE_ATTACK";

/// Converts one showcase avatar into the internal profile.
pub fn convert_avatar(
    tables: &ProviderTables,
    avatar: &RawAvatar,
    timestamp: u64,
) -> GsResult<CharacterProfile> {
    let meta = tables
        .characters
        .get(&avatar.avatar_id.to_string())
        .ok_or_else(|| {
            GsPanelError::Provider(format!("unknown avatar id {}", avatar.avatar_id))
        })?;
    let element = element_from_provider(&meta.element).ok_or_else(|| {
        GsPanelError::Provider(format!(
            "avatar {} has unrecognized element '{}'",
            avatar.avatar_id, meta.element
        ))
    })?;

    let fight = |key: &str| avatar.fight_prop_map.get(key).copied().unwrap_or(0.0);

    let level = avatar
        .prop_map
        .get(LEVEL_PROP_KEY)
        .and_then(|p| p.val.as_deref())
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1);

    let base_stats = BaseStats::new(fight(BASE_HP_KEY), fight(BASE_ATK_KEY), fight(BASE_DEF_KEY));

    let mut panel_stats = BTreeMap::new();
    panel_stats.insert(StatKind::Hp, fight(TOTAL_HP_KEY));
    // The total-attack key lags behind some buffs; rebuild it from its parts.
    panel_stats.insert(
        StatKind::Atk,
        fight(BASE_ATK_KEY) * (1.0 + fight(BONUS_ATK_PERCENT_KEY)) + fight(BONUS_ATK_FLAT_KEY),
    );
    panel_stats.insert(StatKind::Def, fight(TOTAL_DEF_KEY));
    panel_stats.insert(StatKind::ElementalMastery, fight(MASTERY_KEY));
    for (key, kind) in PANEL_RATE_KEYS {
        panel_stats.insert(kind, fight(key) * 100.0);
    }

    let mut weapon = None;
    let mut items = Vec::new();
    let mut set_counts: BTreeMap<String, u32> = BTreeMap::new();

    for equip in &avatar.equip_list {
        match equip.flat.item_type.as_str() {
            ITEM_WEAPON => weapon = Some(convert_weapon(tables, equip)),
            ITEM_RELIQUARY => {
                if let Some(item) = convert_relic(tables, equip) {
                    *set_counts.entry(item.set_name.clone()).or_insert(0) += 1;
                    items.push(item);
                }
            }
            other => debug!("Skipping equip of type '{}'", other),
        }
    }
    items.sort_by_key(|item| item.slot);

    Ok(CharacterProfile {
        id: avatar.avatar_id,
        name: tables.character_name(avatar.avatar_id, meta),
        element,
        rarity: meta.rarity(),
        level,
        constellation: avatar.talent_id_list.len() as u8,
        friendship: avatar.fetter_info.as_ref().map(|f| f.exp_level).unwrap_or(0),
        skills: convert_skills(avatar, &meta.skill_order),
        base_stats,
        panel_stats,
        weapon,
        items,
        set_counts,
        timestamp,
    })
}

fn convert_skills(avatar: &RawAvatar, skill_order: &[u64]) -> SkillLevels {
    // Boost keys end in 1 / 2 / 9 for normal attack / skill / burst.
    let boost_for = |suffix: char| {
        avatar
            .proud_skill_extra_level_map
            .iter()
            .find(|(k, _)| k.ends_with(suffix))
            .map(|(_, v)| *v)
            .unwrap_or(0)
    };

    let level_of = |idx: usize, suffix: char| {
        let base_level = skill_order
            .get(idx)
            .and_then(|id| avatar.skill_level_map.get(&id.to_string()))
            .copied()
            .unwrap_or(1);
        SkillLevel {
            level: base_level + boost_for(suffix),
            base_level,
        }
    };

    SkillLevels {
        normal: level_of(0, '1'),
        skill: level_of(1, '2'),
        burst: level_of(2, '9'),
    }
}

fn convert_weapon(tables: &ProviderTables, equip: &RawEquip) -> Weapon {
    let stats = &equip.flat.weapon_stats;
    let base_attack = stats.first().map(|s| s.stat_value).unwrap_or(0.0);
    let sub = stats
        .last()
        .filter(|s| s.append_prop_id != BASE_ATTACK_PROP)
        .map(|s| Affix::new(stat_from_fight_prop(&s.append_prop_id), s.stat_value));

    let (level, refinement) = match &equip.weapon {
        Some(state) => (
            state.level,
            state.affix_map.values().next().copied().unwrap_or(0) as u8 + 1,
        ),
        None => (1, 1),
    };

    Weapon {
        id: equip.item_id,
        name: tables.text(equip.flat.name_text_map_hash.as_deref()),
        rarity: equip.flat.rank_level,
        level,
        refinement,
        base_attack,
        sub,
    }
}

fn convert_relic(tables: &ProviderTables, equip: &RawEquip) -> Option<Item> {
    let flat = &equip.flat;
    let slot = flat.equip_type.as_deref().and_then(slot_from_equip_type);
    let (slot, main) = match (slot, &flat.reliquary_mainstat) {
        (Some(slot), Some(main)) => (slot, main),
        _ => {
            debug!("Artifact {} has no slot or main stat, skipped", equip.item_id);
            return None;
        }
    };

    let reliquary = equip.reliquary.clone().unwrap_or_default();
    let append_history = reliquary
        .append_prop_id_list
        .iter()
        .map(|id| {
            tables
                .append_prop(*id)
                .map(stat_from_fight_prop)
                .unwrap_or(StatKind::Unknown)
        })
        .collect();

    Some(Item {
        slot,
        main: Affix::new(stat_from_fight_prop(&main.main_prop_id), main.stat_value),
        subs: flat
            .reliquary_substats
            .iter()
            .map(|s| Affix::new(stat_from_fight_prop(&s.append_prop_id), s.stat_value))
            .collect(),
        rarity: flat.rank_level,
        level: reliquary.level.saturating_sub(1).min(u8::MAX as u32) as u8,
        set_name: tables.text(flat.set_name_text_map_hash.as_deref()),
        name: tables.text(flat.name_text_map_hash.as_deref()),
        append_history,
    })
}
