//! Pareto scoring: sorted rankings with cumulative shares and the set of top
//! contributors under a threshold.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::ProblemRecord;
use crate::priority::Priority;
use crate::session::SessionState;
use crate::view::ChartModel;

/// The classic 80/20 cut-off.
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// One record to be ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInput {
    pub name: String,
    pub incident_count: u32,
    pub priority: Option<Priority>,
}

impl ScoreInput {
    pub fn new(name: impl Into<String>, incident_count: u32, priority: Option<Priority>) -> Self {
        Self {
            name: name.into(),
            incident_count,
            priority,
        }
    }
}

impl From<&ProblemRecord> for ScoreInput {
    fn from(p: &ProblemRecord) -> Self {
        Self::new(p.name.clone(), p.incident_count, None)
    }
}

/// How a ranking is ordered before cumulative shares are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Descending by incident count.
    GroundTruth,
    /// Descending by priority, then by incident count.
    UserPriority,
}

impl SortPolicy {
    fn compare(self, a: &ScoreInput, b: &ScoreInput) -> Ordering {
        let by_incidents = b.incident_count.cmp(&a.incident_count);
        match self {
            SortPolicy::GroundTruth => by_incidents,
            // `None` sorts below every priority, so unprioritised records trail.
            SortPolicy::UserPriority => b.priority.cmp(&a.priority).then(by_incidents),
        }
    }
}

/// A ranked record with its running totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub problem_name: String,
    pub incident_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub cumulative_incidents: u64,
    pub cumulative_percent: f64,
}

/// The full output of a scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoRanking {
    pub policy: SortPolicy,
    pub entries: Vec<RankedEntry>,
    pub total_incidents: u64,
}

impl ParetoRanking {
    /// True when the total is zero and every share was defined as 0%.
    pub fn is_degenerate(&self) -> bool {
        self.total_incidents == 0
    }

    /// Problem names in ranked order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.problem_name.as_str()).collect()
    }

    /// See [`top_contributors`].
    pub fn top_contributors(&self, threshold: f64) -> Vec<String> {
        top_contributors(&self.entries, threshold)
    }

    /// Chart-ready series: bars of incidents with a cumulative-percent line.
    pub fn chart(&self, title: impl Into<String>) -> ChartModel {
        ChartModel {
            title: title.into(),
            x_title: "Problems".into(),
            y_title: "Incidents".into(),
            y2_title: "% Cumulative".into(),
            y2_range: (0.0, 110.0),
            categories: self.entries.iter().map(|e| e.problem_name.clone()).collect(),
            bars: self.entries.iter().map(|e| e.incident_count).collect(),
            line: self.entries.iter().map(|e| e.cumulative_percent).collect(),
        }
    }
}

/// Sort `inputs` by `policy` (stable) and attach cumulative sums and shares.
pub fn score(inputs: &[ScoreInput], policy: SortPolicy) -> ParetoRanking {
    let mut sorted: Vec<&ScoreInput> = inputs.iter().collect();
    sorted.sort_by(|a, b| policy.compare(a, b));

    let total: u64 = inputs.iter().map(|i| i.incident_count as u64).sum();
    if total == 0 && !inputs.is_empty() {
        tracing::debug!(entries = inputs.len(), "zero incident total, shares fixed at 0%");
    }

    let mut cumulative = 0u64;
    let entries = sorted
        .into_iter()
        .map(|input| {
            cumulative += input.incident_count as u64;
            let cumulative_percent = if total == 0 {
                0.0
            } else {
                100.0 * cumulative as f64 / total as f64
            };
            RankedEntry {
                problem_name: input.name.clone(),
                incident_count: input.incident_count,
                priority: input.priority,
                cumulative_incidents: cumulative,
                cumulative_percent,
            }
        })
        .collect();

    ParetoRanking {
        policy,
        entries,
        total_incidents: total,
    }
}

/// Rank a scenario's problems by incident count in catalog order.
pub fn score_ground_truth(problems: &[ProblemRecord]) -> ParetoRanking {
    let inputs: Vec<ScoreInput> = problems.iter().map(ScoreInput::from).collect();
    score(&inputs, SortPolicy::GroundTruth)
}

/// Rank the session's problems by the user's priorities in shuffled order.
pub fn score_user(session: &SessionState) -> ParetoRanking {
    let inputs: Vec<ScoreInput> = session
        .prioritised()
        .into_iter()
        .map(|(p, priority)| ScoreInput::new(p.name.clone(), p.incident_count, Some(priority)))
        .collect();
    score(&inputs, SortPolicy::UserPriority)
}

/// Names of the leading entries whose cumulative share stays within `threshold`.
///
/// The comparison is an exact `<=` on the computed share. Empty when the first
/// entry alone already exceeds the threshold.
pub fn top_contributors(entries: &[RankedEntry], threshold: f64) -> Vec<String> {
    entries
        .iter()
        .take_while(|e| e.cumulative_percent <= threshold)
        .map(|e| e.problem_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn p(v: i64) -> Option<Priority> {
        Priority::new(v)
    }

    fn assert_shares_well_formed(ranking: &ParetoRanking) {
        let shares: Vec<f64> = ranking.entries.iter().map(|e| e.cumulative_percent).collect();
        assert!(shares.windows(2).all(|w| w[0] <= w[1]), "not monotone: {shares:?}");
        let last = *shares.last().unwrap();
        assert!((last - 100.0).abs() < 1e-6, "expected 100, got {last}");
    }

    #[test]
    fn mug_factory_top_contributors() {
        let catalog = Catalog::builtin();
        let s = catalog.get_scenario("Fábrica de tazas metálicas").unwrap();
        let ranking = score_ground_truth(&s.problems);

        let shares: Vec<f64> = ranking.entries.iter().map(|e| e.cumulative_percent).collect();
        assert_eq!(&shares[..4], &[30.0, 55.0, 73.0, 85.0]);
        assert_eq!(
            ranking.top_contributors(DEFAULT_THRESHOLD),
            vec!["Demora en entrega", "Producto rayado", "Mal ensamblaje"]
        );
    }

    #[test]
    fn builtin_scenarios_have_well_formed_shares() {
        for scenario in Catalog::builtin().scenarios() {
            let ranking = score_ground_truth(&scenario.problems);
            assert_shares_well_formed(&ranking);
            assert_eq!(ranking.top_contributors(DEFAULT_THRESHOLD).len(), 3);
        }
    }

    #[test]
    fn awkward_totals_still_end_at_one_hundred() {
        let inputs: Vec<ScoreInput> = [7u32, 3, 11, 1, 13, 2, 5]
            .iter()
            .enumerate()
            .map(|(i, &n)| ScoreInput::new(format!("P{i}"), n, p((i as i64 % 10) + 1)))
            .collect();
        assert_shares_well_formed(&score(&inputs, SortPolicy::GroundTruth));
        assert_shares_well_formed(&score(&inputs, SortPolicy::UserPriority));
    }

    #[test]
    fn ground_truth_ties_keep_catalog_order() {
        let inputs = vec![
            ScoreInput::new("first", 5, None),
            ScoreInput::new("big", 9, None),
            ScoreInput::new("second", 5, None),
        ];
        let ranking = score(&inputs, SortPolicy::GroundTruth);
        assert_eq!(ranking.names(), vec!["big", "first", "second"]);
    }

    #[test]
    fn user_policy_sorts_by_priority_then_incidents() {
        let inputs = vec![
            ScoreInput::new("low", 50, p(2)),
            ScoreInput::new("high-small", 1, p(9)),
            ScoreInput::new("high-big", 20, p(9)),
            ScoreInput::new("mid", 10, p(5)),
        ];
        let ranking = score(&inputs, SortPolicy::UserPriority);
        assert_eq!(ranking.names(), vec!["high-big", "high-small", "mid", "low"]);
        assert_eq!(ranking.entries[0].priority, p(9));
    }

    #[test]
    fn user_policy_is_stable_on_full_ties() {
        let inputs = vec![
            ScoreInput::new("x", 4, p(6)),
            ScoreInput::new("y", 4, p(6)),
            ScoreInput::new("z", 4, p(6)),
        ];
        let ranking = score(&inputs, SortPolicy::UserPriority);
        assert_eq!(ranking.names(), vec!["x", "y", "z"]);
    }

    #[test]
    fn zero_total_yields_zero_shares() {
        let inputs = vec![ScoreInput::new("a", 0, None), ScoreInput::new("b", 0, None)];
        let ranking = score(&inputs, SortPolicy::GroundTruth);
        assert!(ranking.is_degenerate());
        assert!(ranking.entries.iter().all(|e| e.cumulative_percent == 0.0));
        assert_eq!(ranking.top_contributors(80.0), vec!["a", "b"]);
    }

    #[test]
    fn dominant_first_entry_gives_empty_top_set() {
        let inputs = vec![ScoreInput::new("huge", 90, None), ScoreInput::new("tiny", 10, None)];
        let ranking = score(&inputs, SortPolicy::GroundTruth);
        assert!(ranking.top_contributors(80.0).is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let inputs = vec![ScoreInput::new("a", 80, None), ScoreInput::new("b", 20, None)];
        let ranking = score(&inputs, SortPolicy::GroundTruth);
        assert_eq!(ranking.top_contributors(80.0), vec!["a"]);
    }

    #[test]
    fn threshold_has_no_tolerance() {
        let inputs = vec![ScoreInput::new("a", 80, None), ScoreInput::new("b", 20, None)];
        let ranking = score(&inputs, SortPolicy::GroundTruth);
        assert_eq!(ranking.entries[0].cumulative_percent, 80.0);
        assert!(ranking.top_contributors(80.0 - 1e-10).is_empty());
    }

    #[test]
    fn empty_input_scores_empty() {
        let ranking = score(&[], SortPolicy::UserPriority);
        assert!(ranking.entries.is_empty());
        assert!(ranking.top_contributors(80.0).is_empty());
    }

    #[test]
    fn chart_series_follow_ranking() {
        let catalog = Catalog::builtin();
        let s = catalog.get_scenario("Fábrica de tazas metálicas").unwrap();
        let chart = score_ground_truth(&s.problems).chart("Real");
        assert_eq!(chart.categories[0], "Demora en entrega");
        assert_eq!(chart.bars, vec![30, 25, 18, 12, 9, 6]);
        assert_eq!(chart.line.len(), 6);
        assert_eq!(chart.y2_range, (0.0, 110.0));
    }
}
