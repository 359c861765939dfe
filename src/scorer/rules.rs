use crate::catalog::StatKind;
use crate::error::{GsPanelError, GsResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_RULE_NAME: &str = "default";

/// One named stat-weight profile. Kinds absent from `weights` weigh 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRule {
    pub name: String,
    pub weights: BTreeMap<StatKind, u32>,
}

impl WeightRule {
    pub fn new<I>(name: &str, weights: I) -> Self
    where
        I: IntoIterator<Item = (StatKind, u32)>,
    {
        Self {
            name: name.to_string(),
            weights: weights.into_iter().collect(),
        }
    }

    /// Used for every character without a curated rule.
    pub fn default_rule() -> Self {
        Self::new(
            DEFAULT_RULE_NAME,
            [
                (StatKind::AtkPercent, 75),
                (StatKind::CritRate, 100),
                (StatKind::CritDamage, 100),
            ],
        )
    }

    pub fn weight(&self, kind: StatKind) -> u32 {
        self.weights.get(&kind).copied().unwrap_or(0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleEntry {
    Single(BTreeMap<StatKind, u32>),
    Variants(Vec<WeightRule>),
}

/// Curated rules keyed by character display name.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: HashMap<String, Vec<WeightRule>>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the variants for a character. An empty list is ignored.
    pub fn insert(&mut self, character: &str, variants: Vec<WeightRule>) {
        if variants.is_empty() {
            warn!("Rule entry for '{}' has no variants, ignoring", character);
            return;
        }
        self.rules.insert(character.to_string(), variants);
    }

    pub fn from_reader<R: Read>(reader: R) -> GsResult<Self> {
        let raw: BTreeMap<String, RuleEntry> = serde_json::from_reader(reader)?;
        let mut book = Self::new();

        for (character, entry) in raw {
            let mut variants = match entry {
                RuleEntry::Single(weights) => vec![WeightRule {
                    name: character.clone(),
                    weights,
                }],
                RuleEntry::Variants(list) => list,
            };
            for variant in &mut variants {
                if variant.weights.remove(&StatKind::Unknown).is_some() {
                    warn!("Rule '{}' weights an unknown stat, dropped", variant.name);
                }
            }
            book.insert(&character, variants);
        }

        Ok(book)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GsResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GsPanelError::Config(format!(
                "could not open rule table '{}': {}",
                path.display(),
                e
            ))
        })?;
        let book = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} character rules from {}",
            book.len(),
            path.display()
        );
        Ok(book)
    }

    /// All variants for a character, in curated order. Never empty.
    pub fn resolve(&self, character: &str) -> Vec<WeightRule> {
        match self.rules.get(character) {
            Some(variants) if !variants.is_empty() => variants.clone(),
            _ => vec![WeightRule::default_rule()],
        }
    }

    /// The first variant, used where a single rule is needed (panel weights).
    pub fn primary(&self, character: &str) -> WeightRule {
        self.rules
            .get(character)
            .and_then(|variants| variants.first())
            .cloned()
            .unwrap_or_else(WeightRule::default_rule)
    }

    pub fn contains(&self, character: &str) -> bool {
        self.rules.contains_key(character)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
