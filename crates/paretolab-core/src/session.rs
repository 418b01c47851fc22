//! Per-session state: the active scenario, its shuffled problem order, and
//! the priorities collected so far.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ParetoError;
use crate::model::{ProblemRecord, Scenario};
use crate::priority::Priority;

/// State owned by a single interaction session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Name of the scenario currently being ranked.
    pub active_scenario: Option<String>,
    /// Permutation of the active scenario's problems, fixed until the scenario changes.
    pub shuffled_order: Vec<ProblemRecord>,
    /// Priority per problem name.
    pub user_priorities: BTreeMap<String, Priority>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle `scenario` into this session unless it is already the active one.
    ///
    /// A change of scenario draws a fresh uniform permutation from `rng` and
    /// resets every priority to its suggested default. Re-selecting the active
    /// scenario returns the stored order and leaves `rng` untouched.
    pub fn ensure_shuffled<R: Rng + ?Sized>(
        &mut self,
        scenario: &Scenario,
        rng: &mut R,
    ) -> &[ProblemRecord] {
        if self.active_scenario.as_deref() != Some(scenario.name.as_str()) {
            let mut order = scenario.problems.clone();
            order.shuffle(rng);
            tracing::debug!(scenario = %scenario.name, problems = order.len(), "reshuffled scenario");

            self.user_priorities = order
                .iter()
                .enumerate()
                .map(|(i, p)| (p.name.clone(), Priority::suggested(i)))
                .collect();
            self.shuffled_order = order;
            self.active_scenario = Some(scenario.name.clone());
        }
        &self.shuffled_order
    }

    /// Record a priority for one problem of the active scenario.
    pub fn set_priority(&mut self, problem: &str, value: i64) -> Result<Priority, ParetoError> {
        if self.active_scenario.is_none() {
            return Err(ParetoError::NoActiveScenario);
        }
        if !self.shuffled_order.iter().any(|p| p.name == problem) {
            return Err(ParetoError::UnknownProblem(problem.to_string()));
        }
        let priority = Priority::for_problem(problem, value)?;
        self.user_priorities.insert(problem.to_string(), priority);
        tracing::debug!(problem, priority = priority.get(), "priority set");
        Ok(priority)
    }

    /// Problems in shuffled order paired with their current priority.
    pub fn prioritised(&self) -> Vec<(&ProblemRecord, Priority)> {
        self.shuffled_order
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let priority = self
                    .user_priorities
                    .get(&p.name)
                    .copied()
                    .unwrap_or_else(|| Priority::suggested(i));
                (p, priority)
            })
            .collect()
    }
}
