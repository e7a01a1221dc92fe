// cli/src/config.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use engine::RankConfig;
use serde::Deserialize;

/// Rank tuning loaded from a TOML file. Unset fields fall back to the
/// engine defaults; command-line flags override both.
#[derive(Debug, Default, Deserialize)]
pub struct RankSettings {
    pub damping: Option<f64>,
    pub delta: Option<f64>,
    pub epsilon: Option<f64>,
    pub max_iterations: Option<usize>,
}

impl RankSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading rank config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing rank config {}", path.display()))
    }

    pub fn into_config(self) -> RankConfig {
        let defaults = RankConfig::default();
        RankConfig {
            damping: self.damping.unwrap_or(defaults.damping),
            delta: self.delta.unwrap_or(defaults.delta),
            epsilon: self.epsilon.unwrap_or(defaults.epsilon),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
        }
    }
}
