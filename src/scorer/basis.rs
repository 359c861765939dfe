use super::rules::WeightRule;
use crate::catalog::{AttributeCatalog, EquipmentSlot, StatKind};
use crate::config::ScoringParams;
use crate::model::BaseStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::debug;

/// Theoretical ceiling of one slot under a rule.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SlotMax {
    pub main: f64,
    pub total: f64,
    /// Representative main stat the ceiling assumes (None for Flower/Feather
    /// or when no legal main stat is weighted).
    pub main_affix: Option<StatKind>,
}

/// Everything derived from one rule variant and one base-stat snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBasis {
    pub rule_name: String,
    /// Rule weights in tie-break order (see `sort_weights`).
    pub weights: Vec<(StatKind, u32)>,
    pub point_marks: BTreeMap<StatKind, f64>,
    pub max_marks: [SlotMax; 5],
}

/// Ordering among equal weights, higher first.
///
/// Crit Damage leads, then damage/healing bonuses, then Mastery and Recharge.
/// Crit Rate only steps back behind those groups; percent and flat stats follow it.
pub fn tie_break_rank(kind: StatKind) -> u8 {
    use StatKind::*;
    match kind {
        CritDamage => 7,
        ElementalDmgBonus | PyroDmgBonus | HydroDmgBonus | AnemoDmgBonus | ElectroDmgBonus
        | DendroDmgBonus | CryoDmgBonus | GeoDmgBonus => 6,
        PhysicalDmgBonus | HealingBonus => 5,
        ElementalMastery | EnergyRecharge => 4,
        CritRate => 3,
        HpPercent | AtkPercent | DefPercent => 2,
        Hp | Atk | Def => 1,
        Unknown => 0,
    }
}

/// Descending weight, ties by `tie_break_rank`, then declaration order.
pub fn sort_weights(rule: &WeightRule) -> Vec<(StatKind, u32)> {
    let mut sorted: Vec<(StatKind, u32)> = rule.weights.iter().map(|(&k, &w)| (k, w)).collect();
    sorted.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| tie_break_rank(b.0).cmp(&tie_break_rank(a.0)))
            .then_with(|| a.0.cmp(&b.0))
    });
    sorted
}

fn usable_base(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl ScoreBasis {
    pub fn build(
        catalog: &AttributeCatalog,
        params: &ScoringParams,
        rule: &WeightRule,
        base: Option<&BaseStats>,
    ) -> Self {
        let weights = sort_weights(rule);

        // 1. Point marks
        let mut point_marks = BTreeMap::new();
        for &(kind, weight) in &weights {
            let roll = catalog.roll_value(kind);
            if weight > 0 && roll > 0.0 {
                point_marks.insert(kind, weight as f64 / roll);
            }
        }

        let base = base.copied().unwrap_or_default();
        let flat_bases = [
            (
                StatKind::Atk,
                usable_base(base.attack, params.default_base_attack),
            ),
            (
                StatKind::Def,
                usable_base(base.defense, params.default_base_defense),
            ),
            (
                StatKind::Hp,
                usable_base(base.health, params.default_base_health),
            ),
        ];
        for (flat, base_value) in flat_bases {
            if let Some(&percent_mark) = point_marks.get(&flat.percent_variant()) {
                point_marks.insert(flat, percent_mark / base_value * 100.0);
            }
        }

        // 2. Slot ceilings
        let mut max_marks = [SlotMax::default(); 5];
        for slot in EquipmentSlot::iter() {
            max_marks[slot.index() - 1] = slot_ceiling(catalog, &weights, slot);
        }

        let basis = Self {
            rule_name: rule.name.clone(),
            weights,
            point_marks,
            max_marks,
        };
        debug!(
            "Score basis '{}': weights [{}] / point marks [{}] / max [{}]",
            basis.rule_name,
            basis
                .weights
                .iter()
                .map(|(k, w)| format!("{}={}", k, w))
                .collect::<Vec<_>>()
                .join(", "),
            basis
                .point_marks
                .iter()
                .map(|(k, m)| format!("{}={:.3}", k, m))
                .collect::<Vec<_>>()
                .join(", "),
            basis
                .max_marks
                .iter()
                .enumerate()
                .map(|(i, m)| format!("#{} main {} total {}", i + 1, m.main, m.total))
                .collect::<Vec<_>>()
                .join(", "),
        );
        basis
    }

    pub fn weight(&self, kind: StatKind) -> u32 {
        self.weights
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, w)| *w)
            .unwrap_or(0)
    }

    pub fn point_mark(&self, kind: StatKind) -> f64 {
        self.point_marks.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn slot_max(&self, slot: EquipmentSlot) -> &SlotMax {
        &self.max_marks[slot.index() - 1]
    }
}

fn slot_ceiling(
    catalog: &AttributeCatalog,
    weights: &[(StatKind, u32)],
    slot: EquipmentSlot,
) -> SlotMax {
    let mut ceiling = SlotMax::default();

    let excluded = if let Some(fixed) = slot.fixed_main() {
        Some(fixed)
    } else {
        let pool = catalog.main_stat_pool(slot);
        let best = weights
            .iter()
            .find(|(kind, weight)| *weight > 0 && pool.contains(kind));
        if let Some(&(kind, weight)) = best {
            ceiling.main = weight as f64;
            ceiling.total += weight as f64 * 2.0;
            ceiling.main_affix = Some(kind);
        }
        ceiling.main_affix
    };

    // The single best substat is worth six rolls, the next three one each.
    ceiling.total += weights
        .iter()
        .filter(|(kind, weight)| {
            *weight > 0 && catalog.is_sub_stat(*kind) && Some(*kind) != excluded
        })
        .take(4)
        .enumerate()
        .map(|(idx, (_, weight))| *weight as f64 * if idx == 0 { 6.0 } else { 1.0 })
        .sum::<f64>();

    ceiling
}
