//! Port contracts for project planning.
//!
//! Ports define infrastructure-agnostic interfaces used by planning
//! services: persistence per entity and validation per entity.

pub mod repository;
pub mod validator;

pub use repository::{
    ProjectRepository, RepositoryError, RepositoryResult, SprintRepository, TaskRepository,
};
pub use validator::{
    ProjectValidator, SprintValidator, TaskValidator, ValidationConfig, ValidationReport,
    ValidationViolation,
};
