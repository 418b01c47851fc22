//! Core data model types for paretolab.
//!
//! Scenarios and their problem records are immutable once built; everything
//! derived from them (rankings, comparisons, views) lives in other modules.

use serde::{Deserialize, Serialize};

/// A single problem a scenario asks the user to prioritise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// Problem name, unique within its scenario.
    pub name: String,
    /// Short description shown next to the slider.
    #[serde(default)]
    pub description: String,
    /// How many incidents were recorded for this problem.
    pub incident_count: u32,
}

impl ProblemRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        incident_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            incident_count,
        }
    }
}

/// A named business case with its list of recorded problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique key of the scenario.
    pub name: String,
    /// Narrative shown before the user starts ranking.
    #[serde(default)]
    pub description: String,
    /// Problems in catalog order. Ground-truth ties are broken by this order.
    #[serde(default)]
    pub problems: Vec<ProblemRecord>,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        problems: Vec<ProblemRecord>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            problems,
        }
    }

    /// Look up a problem by name.
    pub fn problem(&self, name: &str) -> Option<&ProblemRecord> {
        self.problems.iter().find(|p| p.name == name)
    }

    /// Sum of all incident counts.
    pub fn total_incidents(&self) -> u64 {
        self.problems.iter().map(|p| p.incident_count as u64).sum()
    }
}
