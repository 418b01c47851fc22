//! The `paretolab play` command.
//!
//! Walks the user through every slider on stdin, then prints the evaluation.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::Rng;

use paretolab_core::handlers::{evaluate, select_scenario, set_priority};
use paretolab_core::{Catalog, SessionState};

use super::Settings;
use crate::render;

pub fn execute(
    config_path: Option<PathBuf>,
    scenario: Option<String>,
    seed: Option<u64>,
    threshold: Option<f64>,
) -> Result<()> {
    let catalog = Catalog::builtin();
    let settings = Settings::resolve(config_path, &catalog, scenario, seed, threshold)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &catalog,
        &settings.scenario,
        settings.threshold,
        &mut settings.rng(),
        stdin.lock(),
        stdout.lock(),
    )
}

fn run_session<R: Rng + ?Sized, I: BufRead, O: Write>(
    catalog: &Catalog,
    scenario: &str,
    threshold: f64,
    rng: &mut R,
    mut input: I,
    mut output: O,
) -> Result<()> {
    let selected = select_scenario(&SessionState::new(), catalog, scenario, rng)?;
    writeln!(output, "Scenario: {}", selected.view.scenario)?;
    writeln!(output, "{}\n", selected.view.description)?;
    writeln!(
        output,
        "Assign a priority (1-10) to each problem. Press Enter to keep the suggested value."
    )?;

    let mut state = selected.state;
    let mut line = String::new();
    'sliders: for slider in &selected.view.sliders {
        loop {
            write!(output, "{} [{}]: ", slider.label, slider.value)?;
            output.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => {
                    // End of input: keep the remaining defaults.
                    writeln!(output)?;
                    break 'sliders;
                }
                Ok(_) => {}
                // The offending line is consumed, so the next read starts fresh.
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    writeln!(output, "Please enter a whole number between 1 and 10.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            let answer = line.trim();
            if answer.is_empty() {
                break;
            }
            let Ok(value) = answer.parse::<i64>() else {
                writeln!(output, "Please enter a whole number between 1 and 10.")?;
                continue;
            };
            match set_priority(&state, catalog, &slider.problem, value) {
                Ok(next) => {
                    state = next.state;
                    break;
                }
                Err(e) => writeln!(output, "Error: {e}")?,
            }
        }
    }

    let view = evaluate(&state, catalog, threshold)?.view;
    writeln!(output)?;
    write!(output, "{}", render::evaluation(&view))?;
    Ok(())
}
