//! Error types for planning domain transitions and parsing.

use super::{SprintId, SprintStatus, SprintTransition};
use thiserror::Error;

/// Errors returned by entity lifecycle methods.
///
/// A method that returns one of these errors leaves the entity unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanningDomainError {
    /// The sprint state machine does not permit the attempted transition.
    #[error("{}", .attempted.rejection_message())]
    IllegalSprintTransition {
        /// Sprint the transition was attempted on.
        sprint_id: SprintId,
        /// Status the sprint was in when the transition was rejected.
        from: SprintStatus,
        /// Transition that was attempted.
        attempted: SprintTransition,
    },
}

/// Error returned while parsing a stored enum value (status or priority).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseStatusError {
    /// Name of the value being parsed, e.g. `sprint status`.
    pub kind: &'static str,
    /// Raw input that failed to parse.
    pub value: String,
}

impl ParseStatusError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
