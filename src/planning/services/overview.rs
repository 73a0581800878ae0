//! Read model joining a project with its sprints and tasks.

use super::PlanningServiceResult;
use crate::planning::{
    domain::{Project, ProjectId, Sprint, SprintId, Task},
    ports::{ProjectRepository, RepositoryError, SprintRepository, TaskRepository},
};
use std::sync::Arc;

/// A project together with its sprints and tasks, each oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOverview {
    project: Project,
    sprints: Vec<Sprint>,
    tasks: Vec<Task>,
}

impl ProjectOverview {
    pub(crate) const fn new(project: Project, sprints: Vec<Sprint>, tasks: Vec<Task>) -> Self {
        Self {
            project,
            sprints,
            tasks,
        }
    }

    /// Returns the project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the project's sprints.
    #[must_use]
    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    /// Returns every task of the project.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks planned into `sprint_id`.
    pub fn tasks_in_sprint(&self, sprint_id: SprintId) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| task.sprint_id() == Some(sprint_id))
    }

    /// Returns the tasks not planned into any sprint.
    pub fn backlog(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.sprint_id().is_none())
    }

    /// Splits the overview into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Project, Vec<Sprint>, Vec<Task>) {
        (self.project, self.sprints, self.tasks)
    }
}

/// Loads project overviews through the repository ports.
#[derive(Clone)]
pub struct ProjectOverviewService<P, S, T>
where
    P: ProjectRepository,
    S: SprintRepository,
    T: TaskRepository,
{
    projects: Arc<P>,
    sprints: Arc<S>,
    tasks: Arc<T>,
}

impl<P, S, T> ProjectOverviewService<P, S, T>
where
    P: ProjectRepository,
    S: SprintRepository,
    T: TaskRepository,
{
    /// Creates a new overview service.
    #[must_use]
    pub const fn new(projects: Arc<P>, sprints: Arc<S>, tasks: Arc<T>) -> Self {
        Self {
            projects,
            sprints,
            tasks,
        }
    }

    /// Returns a project with its sprints and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`](super::PlanningServiceError::Repository)
    /// when the project is not found or persistence lookup fails.
    pub async fn overview(&self, id: ProjectId) -> PlanningServiceResult<ProjectOverview> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::ProjectNotFound(id))?;
        let sprints = self.sprints.find_by_project(id).await?;
        let tasks = self.tasks.find_by_project(id).await?;
        tracing::debug!(
            project_id = %id,
            sprints = sprints.len(),
            tasks = tasks.len(),
            "loaded project overview"
        );
        Ok(ProjectOverview::new(project, sprints, tasks))
    }
}
