//! The `paretolab evaluate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use paretolab_core::handlers::{evaluate, select_scenario, set_priority};
use paretolab_core::{Catalog, SessionState};

use super::{parse_priority_arg, Settings};
use crate::render;

pub fn execute(
    config_path: Option<PathBuf>,
    scenario: Option<String>,
    priorities: Vec<String>,
    seed: Option<u64>,
    threshold: Option<f64>,
    format: String,
) -> Result<()> {
    let catalog = Catalog::builtin();
    let settings = Settings::resolve(config_path, &catalog, scenario, seed, threshold)?;

    let mut state = select_scenario(
        &SessionState::new(),
        &catalog,
        &settings.scenario,
        &mut settings.rng(),
    )?
    .state;

    for arg in &priorities {
        let (problem, value) = parse_priority_arg(arg)?;
        state = set_priority(&state, &catalog, &problem, value)
            .with_context(|| format!("rejected --priority '{arg}'"))?
            .state;
    }

    let view = evaluate(&state, &catalog, settings.threshold)?.view;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&view)?),
        _ => print!("{}", render::evaluation(&view)),
    }

    Ok(())
}
