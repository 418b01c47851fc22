//! The `paretolab list` command.

use anyhow::Result;

use paretolab_core::Catalog;

pub fn execute(format: String) -> Result<()> {
    let catalog = Catalog::builtin();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&catalog.list_scenarios())?);
        }
        _ => {
            for scenario in catalog.scenarios() {
                println!("{} ({} problems)", scenario.name, scenario.problems.len());
            }
        }
    }

    Ok(())
}
