//! The `paretolab show` command.

use std::path::PathBuf;

use anyhow::Result;

use paretolab_core::handlers::select_scenario;
use paretolab_core::{Catalog, SessionState};

use super::Settings;
use crate::render;

pub fn execute(
    config_path: Option<PathBuf>,
    scenario: Option<String>,
    seed: Option<u64>,
    format: String,
) -> Result<()> {
    let catalog = Catalog::builtin();
    let settings = Settings::resolve(config_path, &catalog, scenario, seed, None)?;

    let selected = select_scenario(
        &SessionState::new(),
        &catalog,
        &settings.scenario,
        &mut settings.rng(),
    )?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&selected.view)?),
        _ => print!("{}", render::scenario(&selected.view)),
    }

    Ok(())
}
