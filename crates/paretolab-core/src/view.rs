//! Render models handed to the presentation host.
//!
//! These carry everything a host needs to draw sliders, charts and feedback
//! without touching the scoring internals. All of them serialize to JSON.

use serde::{Deserialize, Serialize};

use crate::compare::Comparison;
use crate::model::Scenario;
use crate::pareto::ParetoRanking;
use crate::priority::Priority;
use crate::session::SessionState;

/// Definition of one priority slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    /// Stable widget key: `"{scenario}_{index}"`.
    pub key: String,
    pub problem: String,
    pub description: String,
    pub incident_count: u32,
    pub label: String,
    pub min: u8,
    pub max: u8,
    /// Suggested starting value for this position.
    pub default: u8,
    /// Value currently held by the session.
    pub value: u8,
}

/// What the host shows after a scenario is selected or a slider moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioView {
    pub scenario: String,
    pub description: String,
    pub sliders: Vec<SliderSpec>,
}

impl ScenarioView {
    pub(crate) fn build(scenario: &Scenario, session: &SessionState) -> Self {
        let sliders = session
            .prioritised()
            .into_iter()
            .enumerate()
            .map(|(i, (problem, value))| SliderSpec {
                key: format!("{}_{}", scenario.name, i),
                problem: problem.name.clone(),
                description: problem.description.clone(),
                incident_count: problem.incident_count,
                label: format!(
                    "({} – {} complaints) {}",
                    problem.name, problem.incident_count, problem.description
                ),
                min: Priority::MIN,
                max: Priority::MAX,
                default: Priority::suggested(i).get(),
                value: value.get(),
            })
            .collect();

        Self {
            scenario: scenario.name.clone(),
            description: scenario.description.clone(),
            sliders,
        }
    }
}

/// Dual-axis bar + line chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub y2_title: String,
    /// Fixed range of the cumulative-percent axis.
    pub y2_range: (f64, f64),
    pub categories: Vec<String>,
    pub bars: Vec<u32>,
    pub line: Vec<f64>,
}

/// Everything produced by an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationView {
    pub scenario: String,
    pub threshold: f64,
    pub user_ranking: ParetoRanking,
    pub real_ranking: ParetoRanking,
    pub user_chart: ChartModel,
    pub real_chart: ChartModel,
    /// Real problems covering the threshold, in ranked order.
    pub real_top: Vec<String>,
    pub comparison: Comparison,
    /// Feedback lines in display order.
    pub summary: Vec<String>,
}

impl EvaluationView {
    pub(crate) fn summary_lines(
        threshold: f64,
        real_top: &[String],
        comparison: &Comparison,
    ) -> Vec<String> {
        vec![
            format!("Key problems (cover {threshold}%): {}", real_top.join(", ")),
            format!(
                "You correctly prioritized {} of {} key problems.",
                comparison.match_count, comparison.total_count
            ),
            comparison.verdict.message().to_string(),
        ]
    }
}
