//! paretolab CLI — an interactive 80/20 prioritization trainer.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use paretolab_core::ParetoError;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "paretolab", version, about = "Pareto (80/20) prioritization trainer")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available scenarios
    List {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show a scenario and its priority sliders
    Show {
        /// Scenario name
        #[arg(long)]
        scenario: Option<String>,

        /// Shuffle seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Rank a scenario with the given priorities and compare against the data
    Evaluate {
        /// Scenario name
        #[arg(long)]
        scenario: Option<String>,

        /// Priority for one problem, as "Problem=7" (repeatable)
        #[arg(long = "priority", value_name = "PROBLEM=VALUE")]
        priorities: Vec<String>,

        /// Shuffle seed
        #[arg(long)]
        seed: Option<u64>,

        /// Cumulative percentage that defines the key problems
        #[arg(long)]
        threshold: Option<f64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Assign priorities interactively, then evaluate
    Play {
        /// Scenario name
        #[arg(long)]
        scenario: Option<String>,

        /// Shuffle seed
        #[arg(long)]
        seed: Option<u64>,

        /// Cumulative percentage that defines the key problems
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("paretolab=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::List { format } => commands::list::execute(format),
        Commands::Show {
            scenario,
            seed,
            format,
        } => commands::show::execute(config, scenario, seed, format),
        Commands::Evaluate {
            scenario,
            priorities,
            seed,
            threshold,
            format,
        } => commands::evaluate::execute(config, scenario, priorities, seed, threshold, format),
        Commands::Play {
            scenario,
            seed,
            threshold,
        } => commands::play::execute(config, scenario, seed, threshold),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        // Rejected user input exits like a usage error.
        let input_error = e
            .downcast_ref::<ParetoError>()
            .is_some_and(ParetoError::is_input_error);
        process::exit(if input_error { 2 } else { 1 });
    }
}
