//! Service-level errors for planning orchestration.

use crate::planning::{
    domain::{PlanningDomainError, ProjectId, SprintId},
    ports::{RepositoryError, ValidationReport},
};
use thiserror::Error;

/// Service-level errors for project, sprint and task operations.
#[derive(Debug, Clone, Error)]
pub enum PlanningServiceError {
    /// An entity lifecycle method rejected the operation.
    #[error(transparent)]
    Domain(#[from] PlanningDomainError),

    /// The entity failed one or more business rules.
    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    /// A task was planned into a sprint owned by a different project.
    #[error("sprint {sprint_id} does not belong to project {project_id}")]
    SprintProjectMismatch {
        /// Sprint the task was to be planned into.
        sprint_id: SprintId,
        /// Project owning the task.
        project_id: ProjectId,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Coarse classification of a [`PlanningServiceError`].
///
/// A transport layer maps these onto its own status codes, for example
/// `NotFound` to HTTP 404 and `InvalidRequest` to HTTP 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    /// The addressed entity does not exist.
    NotFound,
    /// The request was well formed but broke a business rule.
    InvalidRequest,
    /// The request collides with existing state.
    Conflict,
    /// Infrastructure failure.
    Internal,
}

impl PlanningServiceError {
    /// Classifies the error for transport translation.
    #[must_use]
    pub const fn kind(&self) -> ServiceErrorKind {
        match self {
            Self::Domain(_) | Self::Validation(_) | Self::SprintProjectMismatch { .. } => {
                ServiceErrorKind::InvalidRequest
            }
            Self::Repository(
                RepositoryError::ProjectNotFound(_)
                | RepositoryError::SprintNotFound(_)
                | RepositoryError::TaskNotFound(_),
            ) => ServiceErrorKind::NotFound,
            Self::Repository(
                RepositoryError::DuplicateProject(_)
                | RepositoryError::DuplicateSprint(_)
                | RepositoryError::DuplicateTask(_),
            ) => ServiceErrorKind::Conflict,
            Self::Repository(
                RepositoryError::InvalidPersistedData(_) | RepositoryError::Persistence(_),
            ) => ServiceErrorKind::Internal,
        }
    }

    /// Returns the validation report when the error is a validation failure.
    #[must_use]
    pub const fn validation_report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Validation(report) => Some(report),
            _ => None,
        }
    }
}

/// Result type for planning service operations.
pub type PlanningServiceResult<T> = Result<T, PlanningServiceError>;
