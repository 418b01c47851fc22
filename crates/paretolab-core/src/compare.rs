//! Comparison of the user's ranking against the real top contributors.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative outcome of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Perfect,
    Acceptable,
    Poor,
}

impl Verdict {
    /// Classify `match_count` out of `total_count`. An empty real top-set is a
    /// vacuous perfect match.
    pub fn classify(match_count: usize, total_count: usize) -> Self {
        if match_count == total_count {
            Verdict::Perfect
        } else if match_count >= total_count / 2 {
            Verdict::Acceptable
        } else {
            Verdict::Poor
        }
    }

    /// Feedback shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Excellent! Your analysis lines up perfectly with the real data.",
            Verdict::Acceptable => {
                "Acceptable. You spotted some of the important problems, but your focus could improve."
            }
            Verdict::Poor => {
                "Your priorities drifted away from the real data. Look again at how often each problem occurs."
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Perfect => write!(f, "perfect"),
            Verdict::Acceptable => write!(f, "acceptable"),
            Verdict::Poor => write!(f, "poor"),
        }
    }
}

/// Result of comparing the real top-set with the head of the user's ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub match_count: usize,
    pub total_count: usize,
    pub verdict: Verdict,
    /// The first `total_count` names of the user's ranking.
    pub user_candidates: Vec<String>,
    /// Real top contributors the user also placed up front, in real order.
    pub matched: Vec<String>,
}

impl Comparison {
    /// Share of the real top-set the user recovered; 1.0 when there was nothing to find.
    pub fn match_ratio(&self) -> f64 {
        if self.total_count == 0 {
            1.0
        } else {
            self.match_count as f64 / self.total_count as f64
        }
    }
}

/// Compare `real_top` against the same-length prefix of `user_order`.
///
/// `user_order` is the user's full ranking, not their own top-80% set.
pub fn compare<S: AsRef<str>, U: AsRef<str>>(real_top: &[S], user_order: &[U]) -> Comparison {
    let total_count = real_top.len();
    let user_candidates: Vec<String> = user_order
        .iter()
        .take(total_count)
        .map(|s| s.as_ref().to_string())
        .collect();

    let candidate_set: HashSet<&str> = user_candidates.iter().map(String::as_str).collect();
    let real: Vec<&str> = real_top.iter().map(|s| s.as_ref()).collect();
    let mut seen = HashSet::new();
    let matched: Vec<String> = real
        .into_iter()
        .filter(|name| candidate_set.contains(name) && seen.insert(*name))
        .map(str::to_string)
        .collect();

    let match_count = matched.len();
    Comparison {
        match_count,
        total_count,
        verdict: Verdict::classify(match_count, total_count),
        user_candidates,
        matched,
    }
}
