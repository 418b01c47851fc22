//! User-assigned priorities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParetoError;

/// A priority score in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Returns `None` if `value` is outside `1..=10`.
    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Validate a value submitted for `problem`.
    pub fn for_problem(problem: &str, value: i64) -> Result<Self, ParetoError> {
        Self::new(value).ok_or_else(|| ParetoError::OutOfRange {
            problem: problem.to_string(),
            value,
        })
    }

    /// The slider default for the problem shown at `index`: `10 - index`,
    /// never below 1.
    pub fn suggested(index: usize) -> Self {
        let value = (Self::MAX as usize).saturating_sub(index).max(Self::MIN as usize);
        Self(value as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Priority {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("priority out of range: {value}"))
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_inclusive_bounds() {
        assert_eq!(Priority::new(1).map(Priority::get), Some(1));
        assert_eq!(Priority::new(10).map(Priority::get), Some(10));
        assert!(Priority::new(0).is_none());
        assert!(Priority::new(11).is_none());
        assert!(Priority::new(-3).is_none());
    }

    #[test]
    fn for_problem_reports_out_of_range() {
        let err = Priority::for_problem("Poca limpieza", 0).unwrap_err();
        assert_eq!(
            err,
            ParetoError::OutOfRange {
                problem: "Poca limpieza".into(),
                value: 0
            }
        );
    }

    #[test]
    fn suggested_counts_down_and_clamps() {
        assert_eq!(Priority::suggested(0).get(), 10);
        assert_eq!(Priority::suggested(5).get(), 5);
        assert_eq!(Priority::suggested(9).get(), 1);
        assert_eq!(Priority::suggested(10).get(), 1);
        assert_eq!(Priority::suggested(42).get(), 1);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Priority>("7").unwrap().get(), 7);
        assert!(serde_json::from_str::<Priority>("12").is_err());
        assert_eq!(serde_json::to_string(&Priority::suggested(2)).unwrap(), "8");
    }
}
