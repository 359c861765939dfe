use crate::catalog::{Element, StatKind};
use crate::provider::CharacterProfile;
use crate::scorer::WeightRule;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of the combat-stat panel, annotated with the rule weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLine {
    pub kind: StatKind,
    pub value: f64,
    pub weight: u32,
    /// `[base, bonus]` for HP, ATK and DEF.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<[f64; 2]>,
    /// The kept damage bonus does not match the wearer or the rule.
    #[serde(default)]
    pub abnormal: bool,
}

impl PanelLine {
    pub fn display_value(&self) -> String {
        self.kind.format_value(self.value)
    }
}

fn preferred_damage(rule: &WeightRule, element: Element) -> StatKind {
    if rule.weight(StatKind::ElementalDmgBonus) > rule.weight(StatKind::PhysicalDmgBonus) {
        element.dmg_bonus()
    } else {
        StatKind::PhysicalDmgBonus
    }
}

/// Picks the single damage bonus worth showing: highest value, ties go to the
/// kind the rule prefers, then to the first in panel order.
fn strongest_damage(profile: &CharacterProfile, rule: &WeightRule) -> Option<StatKind> {
    let prefer = preferred_damage(rule, profile.element);
    // max_by keeps the last maximum, so walk backwards
    profile
        .panel_stats
        .iter()
        .rev()
        .filter(|(kind, _)| kind.is_damage_bonus())
        .max_by(|(ka, va), (kb, vb)| {
            va.partial_cmp(vb)
                .unwrap_or(Ordering::Equal)
                .then_with(|| (**ka == prefer).cmp(&(**kb == prefer)))
        })
        .map(|(kind, _)| *kind)
}

/// Reduces a character's panel to display lines under the selected rule.
pub fn summarize(profile: &CharacterProfile, rule: &WeightRule) -> Vec<PanelLine> {
    let damage = strongest_damage(profile, rule);
    let damage_weight = rule
        .weight(StatKind::ElementalDmgBonus)
        .max(rule.weight(StatKind::PhysicalDmgBonus));

    let mut lines = Vec::new();
    for (&kind, &value) in &profile.panel_stats {
        if kind.is_damage_bonus() {
            if Some(kind) != damage {
                continue;
            }
            let foreign = kind
                .element()
                .is_some_and(|element| element != profile.element);
            let abnormal = foreign || rule.weight(kind.generic()) != damage_weight;
            lines.push(PanelLine {
                kind,
                value,
                weight: damage_weight,
                detail: None,
                abnormal,
            });
            continue;
        }

        let weight = match rule.weight(kind) {
            0 => rule.weight(kind.percent_variant()),
            w => w,
        };
        if kind == StatKind::HealingBonus && value == 0.0 && weight == 0 {
            continue;
        }

        let detail = match kind {
            StatKind::Hp => Some(profile.base_stats.health),
            StatKind::Atk => Some(profile.base_stats.attack),
            StatKind::Def => Some(profile.base_stats.defense),
            _ => None,
        }
        .map(|base| [base.round(), (value - base).round()]);

        lines.push(PanelLine {
            kind,
            value,
            weight,
            detail,
            abnormal: false,
        });
    }
    lines
}
