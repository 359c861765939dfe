use super::basis::ScoreBasis;
use super::item::{round1, score_item, ScoreResult};
use super::rank::Rank;
use super::rules::{RuleBook, WeightRule};
use crate::catalog::{AttributeCatalog, Element, StatKind};
use crate::config::ScoringParams;
use crate::model::{BaseStats, Item};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    pub item: Item,
    pub result: ScoreResult,
}

/// A loadout scored under a single rule variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantScore {
    pub rule_name: String,
    pub weights: Vec<(StatKind, u32)>,
    pub items: Vec<ScoredItem>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScoreResult {
    pub rule_name: String,
    pub weights: Vec<(StatKind, u32)>,
    pub items: Vec<ScoredItem>,
    pub total: f64,
    /// Rank of the per-item average. None for an empty loadout.
    pub rank: Option<Rank>,
    /// Every evaluated variant and its total, in resolve order.
    pub candidates: Vec<(String, f64)>,
}

pub fn score_variant(
    catalog: &AttributeCatalog,
    params: &ScoringParams,
    rule: &WeightRule,
    items: &[Item],
    element: Element,
    base: Option<&BaseStats>,
) -> VariantScore {
    let basis = ScoreBasis::build(catalog, params, rule, base);

    let scored: Vec<ScoredItem> = items
        .iter()
        .map(|item| {
            if !catalog.is_legal_main(item.slot, item.main.kind) || item.subs.len() > 4 {
                debug!(
                    "Malformed {} item (main {}, {} subs), scoring anyway",
                    item.slot,
                    item.main.kind,
                    item.subs.len()
                );
            }
            ScoredItem {
                item: item.clone(),
                result: score_item(&basis, params, item, element),
            }
        })
        .collect();

    let total = round1(scored.iter().map(|s| s.result.score).sum::<f64>());

    VariantScore {
        rule_name: basis.rule_name,
        weights: basis.weights,
        items: scored,
        total,
    }
}

/// Highest total wins; on equal totals the earlier variant is kept.
pub fn select_best(variants: Vec<VariantScore>) -> Option<BestScoreResult> {
    let candidates: Vec<(String, f64)> = variants
        .iter()
        .map(|v| (v.rule_name.clone(), v.total))
        .collect();

    let best = variants.into_iter().reduce(|best, next| {
        if next.total > best.total {
            next
        } else {
            best
        }
    })?;

    Some(finish(best, candidates))
}

fn finish(best: VariantScore, candidates: Vec<(String, f64)>) -> BestScoreResult {
    let rank = if best.items.is_empty() {
        None
    } else {
        Some(Rank::from_score(best.total / best.items.len() as f64))
    };

    BestScoreResult {
        rule_name: best.rule_name,
        weights: best.weights,
        items: best.items,
        total: best.total,
        rank,
        candidates,
    }
}

/// Scores a loadout under every rule variant of a character and keeps the best.
pub fn rank_loadout(
    catalog: &AttributeCatalog,
    params: &ScoringParams,
    rules: &RuleBook,
    character: &str,
    items: &[Item],
    element: Element,
    base: Option<&BaseStats>,
) -> BestScoreResult {
    let variants = rules.resolve(character);

    let scored: Vec<VariantScore> = variants
        .par_iter()
        .map(|rule| score_variant(catalog, params, rule, items, element, base))
        .collect();

    select_best(scored).unwrap_or_else(|| {
        // resolve() never returns an empty list
        let only = score_variant(
            catalog,
            params,
            &WeightRule::default_rule(),
            items,
            element,
            base,
        );
        let candidates = vec![(only.rule_name.clone(), only.total)];
        finish(only, candidates)
    })
}
