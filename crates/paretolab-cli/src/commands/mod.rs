//! Subcommand implementations and the settings they share.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use paretolab_core::config::{load_config_from, EnvOverrides, ParetolabConfig};
use paretolab_core::Catalog;

pub mod evaluate;
pub mod init;
pub mod list;
pub mod play;
pub mod show;

/// Settings resolved from the config file, the environment and the flags.
pub struct Settings {
    pub scenario: String,
    pub seed: Option<u64>,
    pub threshold: f64,
}

impl Settings {
    /// Merge command-line flags over the environment and the config file.
    ///
    /// A flag replaces its environment variable outright, so a malformed
    /// variable is ignored when the flag is given. Validation runs once, on
    /// the merged result.
    pub fn resolve(
        config_path: Option<PathBuf>,
        catalog: &Catalog,
        scenario: Option<String>,
        seed: Option<u64>,
        threshold: Option<f64>,
    ) -> Result<Self> {
        let mut env = EnvOverrides::from_env();
        if seed.is_some() {
            env.seed = None;
        }
        if threshold.is_some() {
            env.threshold = None;
        }

        let mut config = load_config_from(config_path.as_deref(), &env)?;
        if let Some(t) = threshold {
            config.threshold = t;
        }
        config.validate()?;

        let settings = Self {
            scenario: pick_scenario(scenario, &config, catalog)?,
            seed: seed.or(config.seed),
            threshold: config.threshold,
        };
        tracing::debug!(
            scenario = %settings.scenario,
            seed = ?settings.seed,
            threshold = settings.threshold,
            "resolved settings"
        );
        Ok(settings)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn pick_scenario(
    flag: Option<String>,
    config: &ParetolabConfig,
    catalog: &Catalog,
) -> Result<String> {
    match flag.or_else(|| config.default_scenario.clone()) {
        Some(name) => Ok(name),
        None => anyhow::bail!(
            "no scenario given; pass --scenario with one of: {}",
            catalog.list_scenarios().join(", ")
        ),
    }
}

/// Split a `"Problem=7"` argument into its name and value.
pub fn parse_priority_arg(arg: &str) -> Result<(String, i64)> {
    let (name, value) = arg
        .rsplit_once('=')
        .ok_or_else(|| anyhow::anyhow!("invalid priority '{arg}': expected PROBLEM=VALUE"))?;
    let name = name.trim();
    anyhow::ensure!(!name.is_empty(), "invalid priority '{arg}': missing problem name");
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|_| anyhow::anyhow!("invalid priority '{arg}': value must be a whole number"))?;
    Ok((name.to_string(), value))
}
