use crate::error::{GsPanelError, GsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub resources: ResourcePaths,
    #[command(flatten)]
    pub scoring: ScoringParams,
}

/// Locations of the locally mirrored resource tables.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePaths {
    #[arg(long, default_value = "data/gspanel/calc-rule.json")]
    pub rules: String,
    #[arg(long, default_value = "data/gspanel/characters.json")]
    pub characters: String,
    #[arg(long, default_value = "data/gspanel/TextMapCHS.json")]
    pub text_map: String,
    #[arg(long, default_value = "data/gspanel/relic-append.json")]
    pub append_props: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            rules: "data/gspanel/calc-rule.json".to_string(),
            characters: "data/gspanel/characters.json".to_string(),
            text_map: "data/gspanel/TextMapCHS.json".to_string(),
            append_props: "data/gspanel/relic-append.json".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Substats whose rule weight exceeds this are shown as "great".
    #[arg(long, default_value_t = 79)]
    pub great_weight_threshold: u32,

    // Fallback base stats used when the snapshot carries none
    #[arg(long, default_value_t = 400.0)]
    pub default_base_health: f64,
    #[arg(long, default_value_t = 1020.0)]
    pub default_base_attack: f64,
    #[arg(long, default_value_t = 300.0)]
    pub default_base_defense: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            great_weight_threshold: 79,
            default_base_health: 400.0,
            default_base_attack: 1020.0,
            default_base_defense: 300.0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GsPanelError::Config(format!("could not read '{}': {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Applies only the flags the user actually typed on top of a file-based config.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(resources, rules, "rules");
        update_if_present!(resources, characters, "characters");
        update_if_present!(resources, text_map, "text_map");
        update_if_present!(resources, append_props, "append_props");

        update_if_present!(scoring, great_weight_threshold, "great_weight_threshold");
        update_if_present!(scoring, default_base_health, "default_base_health");
        update_if_present!(scoring, default_base_attack, "default_base_attack");
        update_if_present!(scoring, default_base_defense, "default_base_defense");
    }
}

impl ScoringParams {
    pub fn validate(&self) -> GsResult<()> {
        let bases = [
            ("default_base_health", self.default_base_health),
            ("default_base_attack", self.default_base_attack),
            ("default_base_defense", self.default_base_defense),
        ];
        for (name, value) in bases {
            if !value.is_finite() || value <= 0.0 {
                return Err(GsPanelError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
