use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::CANONICAL_MAX;

/// Letter grade for an item or loadout score.
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
pub enum Rank {
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
    #[strum(serialize = "ACE")]
    #[serde(rename = "ACE")]
    Ace,
    #[strum(serialize = "ACE²")]
    #[serde(rename = "ACE²")]
    AceSquared,
    /// Score above the canonical range: the inputs were out of the game's range.
    #[strum(serialize = "ERR")]
    #[serde(rename = "ERR")]
    Err,
}

/// Inclusive upper bounds, ascending.
const THRESHOLDS: [(Rank, f64); 9] = [
    (Rank::D, 10.0),
    (Rank::C, 16.5),
    (Rank::B, 23.1),
    (Rank::A, 29.7),
    (Rank::S, 36.3),
    (Rank::SS, 42.9),
    (Rank::SSS, 49.5),
    (Rank::Ace, 56.1),
    (Rank::AceSquared, CANONICAL_MAX),
];

impl Rank {
    pub fn from_score(score: f64) -> Rank {
        if !score.is_finite() {
            return Rank::Err;
        }
        THRESHOLDS
            .iter()
            .find(|(_, upper)| score <= *upper)
            .map(|(rank, _)| *rank)
            .unwrap_or(Rank::Err)
    }

    pub fn is_anomaly(&self) -> bool {
        *self == Rank::Err
    }
}
