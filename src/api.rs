use crate::catalog::AttributeCatalog;
use crate::config::Config;
use crate::error::GsResult;
use crate::panel::{self, PanelLine};
use crate::provider::{self, CharacterProfile, ProviderTables, RawShowcase};
use crate::scorer::{BestScoreResult, RuleBook, Scorer, WeightRule};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Everything loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct PanelResources {
    pub scorer: Scorer,
    pub tables: ProviderTables,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCharacter {
    pub profile: CharacterProfile,
    pub score: BestScoreResult,
    pub panel: Vec<PanelLine>,
    pub set_bonuses: Vec<(String, u32)>,
}

impl PanelResources {
    pub fn new(scorer: Scorer, tables: ProviderTables) -> Self {
        Self { scorer, tables }
    }

    /// Loads the rule book and provider tables named by the config.
    ///
    /// A missing rule table is not fatal: every character then scores under
    /// the default rule.
    pub fn load(config: &Config) -> GsResult<Self> {
        config.scoring.validate()?;

        let rules = if Path::new(&config.resources.rules).exists() {
            RuleBook::load_from_file(&config.resources.rules)?
        } else {
            warn!(
                "Rule table '{}' not found, using the default rule for everyone",
                config.resources.rules
            );
            RuleBook::new()
        };

        let scorer = Scorer::new(AttributeCatalog::standard(), config.scoring.clone(), rules);
        let tables = ProviderTables::load(&config.resources)?;
        Ok(Self::new(scorer, tables))
    }

    pub fn score_profile(&self, profile: CharacterProfile) -> ScoredCharacter {
        let score = self.scorer.rank_loadout(
            &profile.name,
            &profile.items,
            profile.element,
            Some(&profile.base_stats),
        );
        let rule = WeightRule::new(&score.rule_name, score.weights.iter().copied());
        let panel = panel::summarize(&profile, &rule);
        let set_bonuses = provider::active_set_bonuses(&profile.set_counts);

        ScoredCharacter {
            profile,
            score,
            panel,
            set_bonuses,
        }
    }

    /// Converts and scores every showcased character.
    ///
    /// Characters that fail conversion are logged and skipped; snapshot-level
    /// problems fail the whole call.
    pub fn score_showcase(&self, showcase: &RawShowcase) -> GsResult<Vec<ScoredCharacter>> {
        let avatars = provider::check_snapshot(showcase)?;
        let timestamp = now_secs();

        let scored: Vec<ScoredCharacter> = avatars
            .par_iter()
            .filter_map(
                |avatar| match provider::convert_avatar(&self.tables, avatar, timestamp) {
                    Ok(profile) => Some(self.score_profile(profile)),
                    Err(e) => {
                        warn!("Skipping avatar {}: {}", avatar.avatar_id, e);
                        None
                    }
                },
            )
            .collect();

        info!("Scored {} of {} characters", scored.len(), avatars.len());
        Ok(scored)
    }

    pub fn score_showcase_str(&self, json: &str) -> GsResult<Vec<ScoredCharacter>> {
        let showcase = provider::parse_showcase(json)?;
        self.score_showcase(&showcase)
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
