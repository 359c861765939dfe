use super::basis::ScoreBasis;
use super::rank::Rank;
use super::{CANONICAL_MAX, CONVERSION_FACTOR};
use crate::catalog::{Element, StatKind};
use crate::config::ScoringParams;
use crate::model::Item;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Usefulness {
    Unused,
    Useful,
    Great,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScore {
    pub kind: StatKind,
    pub value: f64,
    pub score: f64,
    pub usefulness: Usefulness,
}

/// Scored view of one item. Display fields are rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: f64,
    pub rank: Rank,
    pub main_score: f64,
    pub subs: Vec<SubScore>,
    /// 50..=100; how much of the score survives an off-target main stat.
    pub main_penalty_pct: f64,
    /// Rescales this slot's ceiling onto the 0-66 range.
    pub total_alignment_pct: f64,
    /// Enhancement rolls that landed on a zero-weight stat.
    pub off_stat_rolls: usize,
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Point mark of a main stat. Elemental bonuses only count for the wearer's own element.
fn main_point_mark(basis: &ScoreBasis, kind: StatKind, element: Element) -> f64 {
    match kind.element() {
        Some(bonus_element) if bonus_element == element => {
            basis.point_mark(StatKind::ElementalDmgBonus)
        }
        Some(_) => 0.0,
        None => basis.point_mark(kind),
    }
}

pub fn score_item(
    basis: &ScoreBasis,
    params: &ScoringParams,
    item: &Item,
    element: Element,
) -> ScoreResult {
    let slot_max = basis.slot_max(item.slot);

    // 1. Main stat
    let (main_score, main_penalty_pct) = if item.slot.has_fixed_main() {
        (0.0, 100.0)
    } else {
        let point = main_point_mark(basis, item.main.kind, element) * item.main.value;
        let main_score = point * CONVERSION_FACTOR / 4.0;
        let penalty = if slot_max.main > 0.0 {
            let ratio = point / slot_max.main / 2.0 / 4.0;
            (100.0 - 50.0 * (1.0 - ratio)).clamp(50.0, 100.0)
        } else {
            100.0
        };
        (main_score, penalty)
    };

    // 2. Substats
    let subs: Vec<(SubScore, f64)> = item
        .subs
        .iter()
        .map(|affix| {
            let mark = basis.point_mark(affix.kind);
            let raw = mark * affix.value * CONVERSION_FACTOR;
            let usefulness = if mark == 0.0 {
                Usefulness::Unused
            } else if basis.weight(affix.kind.percent_variant()) > params.great_weight_threshold {
                Usefulness::Great
            } else {
                Usefulness::Useful
            };
            let sub = SubScore {
                kind: affix.kind,
                value: affix.value,
                score: round1(raw),
                usefulness,
            };
            (sub, raw)
        })
        .collect();

    // 3. Alignment onto the canonical range
    let total_alignment_pct = if slot_max.total > 0.0 {
        CANONICAL_MAX / (slot_max.total * CONVERSION_FACTOR) * 100.0
    } else {
        0.0
    };

    // 4. Final score
    let raw_total = main_score + subs.iter().map(|(_, raw)| raw).sum::<f64>();
    let score = round1(raw_total * main_penalty_pct * total_alignment_pct / 10_000.0);

    let off_stat_rolls = item
        .upgrade_rolls()
        .iter()
        .filter(|kind| basis.point_mark(**kind) == 0.0)
        .count();

    ScoreResult {
        score,
        rank: Rank::from_score(score),
        main_score: round1(main_score),
        subs: subs.into_iter().map(|(sub, _)| sub).collect(),
        main_penalty_pct: round1(main_penalty_pct),
        total_alignment_pct: round1(total_alignment_pct),
        off_stat_rolls,
    }
}
