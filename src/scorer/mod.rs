pub mod basis;
pub mod item;
pub mod rank;
pub mod ranker;
pub mod rules;

pub use self::basis::{ScoreBasis, SlotMax};
pub use self::item::{score_item, ScoreResult, SubScore, Usefulness};
pub use self::rank::Rank;
pub use self::ranker::{rank_loadout, BestScoreResult, ScoredItem, VariantScore};
pub use self::rules::{RuleBook, WeightRule};

use crate::catalog::{AttributeCatalog, Element};
use crate::config::ScoringParams;
use crate::model::{BaseStats, Item};

/// Rescales `point mark * value` products onto the canonical range.
pub const CONVERSION_FACTOR: f64 = 46.6 / 6.0 / 100.0;

/// Upper bound of a well-formed item score.
pub const CANONICAL_MAX: f64 = 66.0;

/// The immutable scoring context: catalog, tunables and curated rules.
///
/// Built once at startup and shared read-only between threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub catalog: AttributeCatalog,
    pub params: ScoringParams,
    pub rules: RuleBook,
}

impl Scorer {
    pub fn new(catalog: AttributeCatalog, params: ScoringParams, rules: RuleBook) -> Self {
        Self {
            catalog,
            params,
            rules,
        }
    }

    pub fn basis(&self, rule: &WeightRule, base: Option<&BaseStats>) -> ScoreBasis {
        ScoreBasis::build(&self.catalog, &self.params, rule, base)
    }

    pub fn score_item(&self, basis: &ScoreBasis, item: &Item, element: Element) -> ScoreResult {
        self::item::score_item(basis, &self.params, item, element)
    }

    pub fn rank_loadout(
        &self,
        character: &str,
        items: &[Item],
        element: Element,
        base: Option<&BaseStats>,
    ) -> BestScoreResult {
        self::ranker::rank_loadout(
            &self.catalog,
            &self.params,
            &self.rules,
            character,
            items,
            element,
            base,
        )
    }
}
