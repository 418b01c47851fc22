//! The `paretolab init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("paretolab.toml");
    if path.exists() {
        println!("paretolab.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created paretolab.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: paretolab list");
    println!("  2. Run: paretolab play --scenario \"Tienda online\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# paretolab configuration

# Cumulative share (percent) that defines the key problems.
threshold = 80.0

# Uncomment to make the problem order reproducible.
# seed = 42

# Scenario used when --scenario is omitted.
# default_scenario = "Fábrica de tazas metálicas"
"#;
