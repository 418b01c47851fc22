//! Trainer configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::pareto::DEFAULT_THRESHOLD;

/// Top-level paretolab configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetolabConfig {
    /// Cumulative share (in percent) that defines the key problems.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Fixed shuffle seed; `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Scenario used when the command line doesn't name one.
    #[serde(default)]
    pub default_scenario: Option<String>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for ParetolabConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            seed: None,
            default_scenario: None,
        }
    }
}

impl ParetolabConfig {
    /// Reject settings the scorer can't use.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.threshold > 0.0 && self.threshold <= 100.0,
            "threshold must be in (0, 100], got {}",
            self.threshold
        );
        Ok(())
    }
}

/// Raw values of the `PARETOLAB_*` environment overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub seed: Option<String>,
    pub threshold: Option<String>,
}

impl EnvOverrides {
    /// Read `PARETOLAB_SEED` and `PARETOLAB_THRESHOLD` from the process environment.
    pub fn from_env() -> Self {
        Self {
            seed: std::env::var("PARETOLAB_SEED").ok(),
            threshold: std::env::var("PARETOLAB_THRESHOLD").ok(),
        }
    }
}

/// Load config from an explicit path, or search the default locations, then
/// apply `env` on top.
///
/// Search order:
/// 1. `paretolab.toml` in the current directory
/// 2. `~/.config/paretolab/config.toml`
///
/// The result is not validated; callers merge their own overrides first and
/// then call [`ParetolabConfig::validate`].
pub fn load_config_from(path: Option<&Path>, env: &EnvOverrides) -> Result<ParetolabConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("paretolab.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => ParetolabConfig::default(),
    };

    apply_env_overrides(&mut config, env)?;
    Ok(config)
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config(content: &str) -> Result<ParetolabConfig> {
    Ok(toml::from_str::<ParetolabConfig>(content)?)
}

fn apply_env_overrides(config: &mut ParetolabConfig, env: &EnvOverrides) -> Result<()> {
    if let Some(seed) = &env.seed {
        config.seed = Some(
            seed.trim()
                .parse::<u64>()
                .with_context(|| format!("invalid PARETOLAB_SEED: '{seed}'"))?,
        );
    }
    if let Some(threshold) = &env.threshold {
        config.threshold = threshold
            .trim()
            .parse::<f64>()
            .with_context(|| format!("invalid PARETOLAB_THRESHOLD: '{threshold}'"))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("paretolab"))
}
