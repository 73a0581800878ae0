//! Repository ports for project, sprint and task persistence.
//!
//! Implementations must honour the ownership rules between entities:
//! deleting a project removes its sprints and tasks, and deleting a sprint
//! detaches its tasks (clearing their sprint reference) without removing
//! them. Listings are ordered by creation time.

use crate::planning::domain::{Project, ProjectId, Sprint, SprintId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for planning repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;

    /// Returns every project.
    async fn list_all(&self) -> RepositoryResult<Vec<Project>>;

    /// Stores a new project and returns the persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateProject`] when the identifier
    /// already exists.
    async fn add(&self, project: &Project) -> RepositoryResult<Project>;

    /// Persists changes to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ProjectNotFound`] when the project does
    /// not exist.
    async fn update(&self, project: &Project) -> RepositoryResult<()>;

    /// Deletes a project together with its sprints and tasks.
    ///
    /// Deleting an absent project is a no-op.
    async fn delete(&self, id: ProjectId) -> RepositoryResult<()>;
}

/// Sprint persistence contract.
#[async_trait]
pub trait SprintRepository: Send + Sync {
    /// Finds a sprint by identifier.
    ///
    /// Returns `None` when the sprint does not exist.
    async fn find_by_id(&self, id: SprintId) -> RepositoryResult<Option<Sprint>>;

    /// Returns every sprint of the given project.
    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Sprint>>;

    /// Stores a new sprint and returns the persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateSprint`] when the identifier
    /// already exists or [`RepositoryError::ProjectNotFound`] when the
    /// owning project does not exist.
    async fn add(&self, sprint: &Sprint) -> RepositoryResult<Sprint>;

    /// Persists changes to an existing sprint.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::SprintNotFound`] when the sprint does not
    /// exist.
    async fn update(&self, sprint: &Sprint) -> RepositoryResult<()>;

    /// Deletes a sprint and clears the sprint reference of its tasks.
    ///
    /// Deleting an absent sprint is a no-op.
    async fn delete(&self, id: SprintId) -> RepositoryResult<()>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns every task of the given project.
    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>>;

    /// Returns every task planned into the given sprint.
    async fn find_by_sprint(&self, sprint_id: SprintId) -> RepositoryResult<Vec<Task>>;

    /// Stores a new task and returns the persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateTask`] when the identifier
    /// already exists, [`RepositoryError::ProjectNotFound`] when the owning
    /// project does not exist, or [`RepositoryError::SprintNotFound`] when
    /// the referenced sprint does not exist.
    async fn add(&self, task: &Task) -> RepositoryResult<Task>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when the task does not
    /// exist or [`RepositoryError::SprintNotFound`] when the referenced
    /// sprint does not exist.
    async fn update(&self, task: &Task) -> RepositoryResult<()>;

    /// Deletes a task.
    ///
    /// Deleting an absent task is a no-op.
    async fn delete(&self, id: TaskId) -> RepositoryResult<()>;
}

/// Errors returned by planning repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// A sprint with the same identifier already exists.
    #[error("duplicate sprint identifier: {0}")]
    DuplicateSprint(SprintId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The project was not found.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The sprint was not found.
    #[error("sprint not found: {0}")]
    SprintNotFound(SprintId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
