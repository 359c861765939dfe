use super::raw::de_text_hash;
use crate::config::ResourcePaths;
use crate::error::GsResult;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

pub const MISSING_TRANSLATION: &str = "Missing translation";

/// One entry of the character metadata table, keyed by avatar id.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterMeta {
    #[serde(default)]
    pub element: String,
    /// Pre-resolved display name, when the table carries one.
    #[serde(default, rename = "NameCN", alias = "Name")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_text_hash")]
    pub name_text_map_hash: Option<String>,
    #[serde(default)]
    pub quality_type: String,
    /// Normal attack, elemental skill, burst.
    #[serde(default)]
    pub skill_order: Vec<u64>,
}

impl CharacterMeta {
    pub fn rarity(&self) -> u8 {
        if self.quality_type.contains("QUALITY_ORANGE") {
            5
        } else {
            4
        }
    }
}

/// Lookup tables the converter needs, mirrored locally by the resource layer.
#[derive(Debug, Clone, Default)]
pub struct ProviderTables {
    pub characters: HashMap<String, CharacterMeta>,
    pub text_map: HashMap<String, String>,
    /// Enhancement roll id -> `FIGHT_PROP_*`.
    pub append_props: HashMap<String, String>,
}

fn load_table<T: DeserializeOwned + Default>(path: &str, label: &str) -> GsResult<T> {
    if !Path::new(path).exists() {
        warn!("{} table '{}' not found, continuing without it", label, path);
        return Ok(T::default());
    }
    let file = File::open(path)?;
    let table = serde_json::from_reader(BufReader::new(file))?;
    info!("Loaded {} table from {}", label, path);
    Ok(table)
}

impl ProviderTables {
    pub fn load(paths: &ResourcePaths) -> GsResult<Self> {
        Ok(Self {
            characters: load_table(&paths.characters, "Character")?,
            text_map: load_table(&paths.text_map, "Text map")?,
            append_props: load_table(&paths.append_props, "Append prop")?,
        })
    }

    pub fn text(&self, hash: Option<&str>) -> String {
        hash.and_then(|h| self.text_map.get(h))
            .cloned()
            .unwrap_or_else(|| MISSING_TRANSLATION.to_string())
    }

    pub fn character_name(&self, avatar_id: u64, meta: &CharacterMeta) -> String {
        if let Some(name) = &meta.name {
            return name.clone();
        }
        meta.name_text_map_hash
            .as_deref()
            .and_then(|h| self.text_map.get(h))
            .cloned()
            .unwrap_or_else(|| format!("Unknown character {}", avatar_id))
    }

    pub fn append_prop(&self, id: u64) -> Option<&str> {
        self.append_props.get(&id.to_string()).map(String::as_str)
    }
}
