//! One handler per user action.
//!
//! Each handler takes the current session state by reference and returns the
//! next state together with a render model. The incoming state is never
//! modified, so a caller that gets an error simply keeps what it had.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::compare::compare;
use crate::error::ParetoError;
use crate::pareto::{score_ground_truth, score_user};
use crate::session::SessionState;
use crate::view::{EvaluationView, ScenarioView};

/// The outcome of a handler: the state to keep and what to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition<V> {
    pub state: SessionState,
    pub view: V,
}

/// The user picked a scenario.
///
/// Picking the scenario that is already active keeps the current order and
/// priorities.
pub fn select_scenario<R: Rng + ?Sized>(
    state: &SessionState,
    catalog: &Catalog,
    name: &str,
    rng: &mut R,
) -> Result<Transition<ScenarioView>, ParetoError> {
    let scenario = catalog.get_scenario(name)?;
    let mut next = state.clone();
    next.ensure_shuffled(scenario, rng);
    let view = ScenarioView::build(scenario, &next);
    Ok(Transition { state: next, view })
}

/// The user moved the slider of `problem` to `value`.
pub fn set_priority(
    state: &SessionState,
    catalog: &Catalog,
    problem: &str,
    value: i64,
) -> Result<Transition<ScenarioView>, ParetoError> {
    let scenario_name = state
        .active_scenario
        .as_deref()
        .ok_or(ParetoError::NoActiveScenario)?;
    let scenario = catalog.get_scenario(scenario_name)?;

    let mut next = state.clone();
    next.set_priority(problem, value)?;
    let view = ScenarioView::build(scenario, &next);
    Ok(Transition { state: next, view })
}

/// The user asked for an evaluation of their current ranking.
pub fn evaluate(
    state: &SessionState,
    catalog: &Catalog,
    threshold: f64,
) -> Result<Transition<EvaluationView>, ParetoError> {
    let scenario_name = state
        .active_scenario
        .as_deref()
        .ok_or(ParetoError::NoActiveScenario)?;
    let scenario = catalog.get_scenario(scenario_name)?;

    let user_ranking = score_user(state);
    let real_ranking = score_ground_truth(&scenario.problems);
    let real_top = real_ranking.top_contributors(threshold);
    let comparison = compare(&real_top, &user_ranking.names());

    tracing::info!(
        scenario = %scenario.name,
        matched = comparison.match_count,
        total = comparison.total_count,
        verdict = %comparison.verdict,
        "evaluated ranking"
    );

    let summary = EvaluationView::summary_lines(threshold, &real_top, &comparison);
    let view = EvaluationView {
        scenario: scenario.name.clone(),
        threshold,
        user_chart: user_ranking.chart("Pareto chart (by your priorities)"),
        real_chart: real_ranking.chart("Real Pareto chart (by the data)"),
        user_ranking,
        real_ranking,
        real_top,
        comparison,
        summary,
    };

    Ok(Transition {
        state: state.clone(),
        view,
    })
}
