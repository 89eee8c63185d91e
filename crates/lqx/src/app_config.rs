//! 🔧 App Configuration — the sacred TOML-to-struct pipeline.
//!
//! 🏗️ Powered by Figment: `LQX_*` environment variables merged with an
//! optional TOML file. The file wins on conflicts.
//!
//! ```toml
//! default_state = "jharkhand"
//!
//! [[states]]
//! key = "jharkhand"
//! label = "Jharkhand"
//! authority = "JSBCL"
//! [states.source.File]
//! file_name = "data/jharkhand.json"
//! ```

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::backends::{FileSourceConfig, InMemorySourceConfig};
use crate::variants::DEFAULT_PACK_SCALE;

/// 📦 Everything the catalog needs to know about itself.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// 🎯 The primary state. `None` → first registered state.
    #[serde(default)]
    pub default_state: Option<String>,
    /// 🏛️ State registry, in display order.
    #[serde(default)]
    pub states: Vec<StateEntry>,
    /// 📏 Pack-size tokens, smallest first, used to order variants.
    #[serde(default = "default_pack_scale")]
    pub pack_scale: Vec<String>,
}

fn default_pack_scale() -> Vec<String> {
    DEFAULT_PACK_SCALE.iter().map(|s| s.to_string()).collect()
}

/// 🏛️ One supported state/authority and where its rate list lives.
#[derive(Debug, Deserialize, Clone)]
pub struct StateEntry {
    /// `"jharkhand"`, `"tamilnadu"`: the identifier every query uses.
    pub key: String,
    /// `"Jharkhand"`, `"Tamil Nadu"`: what humans see.
    pub label: String,
    /// `"JSBCL"`, `"TASMAC"`. Falls back to the document's own authority.
    #[serde(default)]
    pub authority: Option<String>,
    pub source: SourceConfig,
}

/// 🎭 Where a state's source document comes from.
#[derive(Debug, Deserialize, Clone)]
pub enum SourceConfig {
    File(FileSourceConfig),
    InMemory(InMemorySourceConfig),
}

/// 🚀 Load the config from `LQX_*` env vars plus an optional TOML file.
///
/// - `None` → env vars only. No file, no assumptions.
/// - `Some(path)` → env vars + TOML, merged. TOML wins on conflicts.
pub fn load_config(config_file_name: Option<&Path>) -> anyhow::Result<AppConfig> {
    info!(
        "🔧 Loading configuration: {:#?}",
        config_file_name.unwrap_or(Path::new(""))
    );

    let config = Figment::new().merge(Env::prefixed("LQX_"));
    let config = match config_file_name {
        Some(file_name) => config.merge(Toml::file(file_name)),
        None => config,
    };

    let context_msg = match config_file_name {
        Some(path) => format!(
            "💀 Failed to parse configuration from file '{}' and environment variables (LQX_*).",
            path.display()
        ),
        None => "💀 Failed to parse configuration from environment variables (LQX_*). \
                 No file was provided, this one's all on the environment."
            .to_string(),
    };

    config.extract().context(context_msg)
}
