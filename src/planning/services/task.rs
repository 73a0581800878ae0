//! Task orchestration service.

use super::{CreateTaskRequest, PlanningServiceError, PlanningServiceResult, UpdateTaskRequest};
use crate::planning::{
    domain::{ProjectId, SprintId, Task, TaskId, TaskStatus, UserId},
    ports::{
        ProjectRepository, RepositoryError, SprintRepository, TaskRepository, TaskValidator,
        ValidationReport,
    },
    validation::DefaultPlanningValidator,
};
use mockable::Clock;
use std::sync::Arc;

/// Task orchestration service.
///
/// Task status is not guarded: [`TaskService::update_status`] accepts every
/// status from every other status. Logged hours are not validated either,
/// so a negative correction is stored as given.
#[derive(Clone)]
pub struct TaskService<T, S, P, C>
where
    T: TaskRepository,
    S: SprintRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    sprints: Arc<S>,
    projects: Arc<P>,
    clock: Arc<C>,
    validator: Arc<dyn TaskValidator>,
}

impl<T, S, P, C> TaskService<T, S, P, C>
where
    T: TaskRepository,
    S: SprintRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service using [`DefaultPlanningValidator`].
    #[must_use]
    pub fn new(tasks: Arc<T>, sprints: Arc<S>, projects: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            sprints,
            projects,
            clock,
            validator: Arc::new(DefaultPlanningValidator::new()),
        }
    }

    /// Replaces the validator run on task creation and update.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn TaskValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Creates and stores a new task in `Todo` status.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the owning project
    /// does not exist or persistence fails, and
    /// [`PlanningServiceError::Validation`] when the task breaks a business
    /// rule.
    pub async fn create(&self, request: CreateTaskRequest) -> PlanningServiceResult<Task> {
        let CreateTaskRequest {
            project_id,
            title,
            description,
            priority,
            estimated_hours,
        } = request;

        if self.projects.find_by_id(project_id).await?.is_none() {
            return Err(RepositoryError::ProjectNotFound(project_id).into());
        }
        let task = Task::new(
            title,
            description,
            priority,
            estimated_hours,
            project_id,
            &*self.clock,
        );
        self.check(&task, self.validator.validate(&task))?;

        let created = self.tasks.add(&task).await?;
        tracing::info!(
            task_id = %created.id(),
            project_id = %project_id,
            priority = %created.priority(),
            "task created"
        );
        Ok(created)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: TaskId) -> PlanningServiceResult<Option<Task>> {
        tracing::debug!(task_id = %id, "looking up task");
        Ok(self.tasks.find_by_id(id).await?)
    }

    /// Returns the tasks of a project, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> PlanningServiceResult<Vec<Task>> {
        tracing::debug!(project_id = %project_id, "listing tasks for project");
        Ok(self.tasks.find_by_project(project_id).await?)
    }

    /// Returns the tasks planned into a sprint, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_sprint(&self, sprint_id: SprintId) -> PlanningServiceResult<Vec<Task>> {
        tracing::debug!(sprint_id = %sprint_id, "listing tasks for sprint");
        Ok(self.tasks.find_by_sprint(sprint_id).await?)
    }

    /// Replaces a task's title, description, priority and estimate.
    ///
    /// Only the title and estimate rules are checked, so a negative logged
    /// total does not block the update.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Validation`] when the new title or
    /// estimate breaks a business rule, or [`PlanningServiceError::Repository`] when
    /// the task is not found or persistence fails.
    pub async fn update_details(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> PlanningServiceResult<Task> {
        let UpdateTaskRequest {
            title,
            description,
            priority,
            estimated_hours,
        } = request;

        let mut task = self.find_by_id_or_error(id).await?;
        task.update_details(title, description, priority, estimated_hours, &*self.clock);
        self.check(&task, self.validator.validate_details(&task))?;
        self.save(task, "task details updated").await
    }

    /// Sets a task's workflow status.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the task is not
    /// found or persistence fails.
    pub async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> PlanningServiceResult<Task> {
        let mut task = self.find_by_id_or_error(id).await?;
        let previous = task.status();
        task.update_status(status, &*self.clock);
        tracing::info!(task_id = %id, from = %previous, to = %status, "task status changed");
        self.save(task, "task status updated").await
    }

    /// Assigns a task to a user.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the task is not
    /// found or persistence fails.
    pub async fn assign_to(&self, id: TaskId, user_id: UserId) -> PlanningServiceResult<Task> {
        let mut task = self.find_by_id_or_error(id).await?;
        task.assign_to(user_id, &*self.clock);
        self.save(task, "task assigned").await
    }

    /// Clears a task's assignee.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the task is not
    /// found or persistence fails.
    pub async fn unassign(&self, id: TaskId) -> PlanningServiceResult<Task> {
        let mut task = self.find_by_id_or_error(id).await?;
        task.unassign(&*self.clock);
        self.save(task, "task unassigned").await
    }

    /// Adds hours to a task's logged total.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the task is not
    /// found or persistence fails.
    pub async fn log_hours(&self, id: TaskId, hours: i32) -> PlanningServiceResult<Task> {
        let mut task = self.find_by_id_or_error(id).await?;
        task.log_hours(hours, &*self.clock);
        tracing::debug!(task_id = %id, hours, total = task.actual_hours(), "hours logged");
        self.save(task, "task hours logged").await
    }

    /// Plans a task into a sprint of the same project.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::SprintProjectMismatch`] when the
    /// sprint belongs to another project, or
    /// [`PlanningServiceError::Repository`] when the task or sprint is not
    /// found or persistence fails.
    pub async fn assign_to_sprint(
        &self,
        id: TaskId,
        sprint_id: SprintId,
    ) -> PlanningServiceResult<Task> {
        let mut task = self.find_by_id_or_error(id).await?;
        let sprint = self
            .sprints
            .find_by_id(sprint_id)
            .await?
            .ok_or(RepositoryError::SprintNotFound(sprint_id))?;
        if sprint.project_id() != task.project_id() {
            tracing::warn!(
                task_id = %id,
                sprint_id = %sprint_id,
                "sprint belongs to another project"
            );
            return Err(PlanningServiceError::SprintProjectMismatch {
                sprint_id,
                project_id: task.project_id(),
            });
        }

        task.assign_to_sprint(sprint_id, &*self.clock);
        self.save(task, "task planned into sprint").await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the task is not
    /// found or persistence fails.
    pub async fn delete(&self, id: TaskId) -> PlanningServiceResult<()> {
        self.find_by_id_or_error(id).await?;
        self.tasks.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn save(&self, task: Task, message: &'static str) -> PlanningServiceResult<Task> {
        self.tasks.update(&task).await?;
        tracing::info!(task_id = %task.id(), "{message}");
        Ok(task)
    }

    fn check(&self, task: &Task, report: ValidationReport) -> PlanningServiceResult<()> {
        if report.is_valid() {
            return Ok(());
        }
        tracing::warn!(task_id = %task.id(), %report, "task rejected by validation");
        Err(PlanningServiceError::Validation(report))
    }

    async fn find_by_id_or_error(&self, id: TaskId) -> PlanningServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::TaskNotFound(id).into())
    }
}
