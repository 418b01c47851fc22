//! Error types for the scoring engine and session handlers.
//!
//! Every variant is recoverable: a failed handler call leaves the caller's
//! session state untouched, so the user can simply correct the input.

use thiserror::Error;

/// Errors surfaced by the catalog, the priority collector, and the handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParetoError {
    /// The requested scenario key is not in the catalog.
    #[error("scenario not found: {0}")]
    NotFound(String),

    /// A priority value fell outside the accepted range.
    #[error("priority {value} for '{problem}' is out of range (expected 1-10)")]
    OutOfRange { problem: String, value: i64 },

    /// A priority was submitted for a problem the active scenario doesn't have.
    #[error("unknown problem: {0}")]
    UnknownProblem(String),

    /// An action that needs a selected scenario ran before any selection.
    #[error("no scenario selected")]
    NoActiveScenario,

    /// Two scenarios in a catalog share the same name.
    #[error("duplicate scenario: {0}")]
    DuplicateScenario(String),

    /// Two problems within one scenario share the same name.
    #[error("duplicate problem '{problem}' in scenario '{scenario}'")]
    DuplicateProblem { scenario: String, problem: String },
}

impl ParetoError {
    /// Returns `true` if the error stems from user input rather than catalog data.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ParetoError::NotFound(_)
                | ParetoError::OutOfRange { .. }
                | ParetoError::UnknownProblem(_)
                | ParetoError::NoActiveScenario
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_problem() {
        let err = ParetoError::OutOfRange {
            problem: "Producto rayado".into(),
            value: 11,
        };
        assert_eq!(
            err.to_string(),
            "priority 11 for 'Producto rayado' is out of range (expected 1-10)"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn catalog_errors_are_not_input_errors() {
        assert!(!ParetoError::DuplicateScenario("x".into()).is_input_error());
        assert!(ParetoError::NotFound("x".into()).is_input_error());
    }
}
