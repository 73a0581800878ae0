//! Project orchestration service.

use super::{CreateProjectRequest, PlanningServiceError, PlanningServiceResult};
use crate::planning::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectValidator, RepositoryError, ValidationConfig},
    validation::DefaultPlanningValidator,
};
use mockable::Clock;
use std::sync::Arc;

/// Project lifecycle orchestration service.
#[derive(Clone)]
pub struct ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    validator: Arc<dyn ProjectValidator>,
}

impl<R, C> ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    ///
    /// Creation is checked by a [`DefaultPlanningValidator`] using
    /// [`ValidationConfig::lenient`], so projects may start in the past.
    /// Pass `DefaultPlanningValidator::new()` to
    /// [`ProjectService::with_validator`] to reject past start dates.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            validator: Arc::new(DefaultPlanningValidator::with_config(
                ValidationConfig::lenient(),
            )),
        }
    }

    /// Replaces the validator run on project creation.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn ProjectValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Creates and stores a new project in `Active` status.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Validation`] when the project breaks a
    /// business rule, or [`PlanningServiceError::Repository`] when
    /// persistence fails.
    pub async fn create(&self, request: CreateProjectRequest) -> PlanningServiceResult<Project> {
        let CreateProjectRequest {
            name,
            description,
            start_date,
            end_date,
        } = request;

        let project = Project::new(name, description, start_date, end_date, &*self.clock);
        let report = self.validator.validate(&project, self.clock.utc());
        if !report.is_valid() {
            tracing::warn!(%report, "project rejected by validation");
            return Err(PlanningServiceError::Validation(report));
        }

        let created = self.repository.add(&project).await?;
        tracing::info!(project_id = %created.id(), name = created.name(), "project created");
        Ok(created)
    }

    /// Finds a project by identifier.
    ///
    /// Returns `Ok(None)` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: ProjectId) -> PlanningServiceResult<Option<Project>> {
        tracing::debug!(project_id = %id, "looking up project");
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every project, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_all(&self) -> PlanningServiceResult<Vec<Project>> {
        tracing::debug!("listing projects");
        Ok(self.repository.list_all().await?)
    }

    /// Replaces a project's name and description.
    ///
    /// The new values are stored as given, without validation.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the project is not
    /// found or persistence fails.
    pub async fn update_details(
        &self,
        id: ProjectId,
        name: impl Into<String> + Send,
        description: impl Into<String> + Send,
    ) -> PlanningServiceResult<Project> {
        let mut project = self.find_by_id_or_error(id).await?;
        project.update_details(name, description, &*self.clock);
        self.repository.update(&project).await?;
        tracing::info!(project_id = %id, "project details updated");
        Ok(project)
    }

    /// Marks a project as completed.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the project is not
    /// found or persistence fails.
    pub async fn complete(&self, id: ProjectId) -> PlanningServiceResult<Project> {
        let mut project = self.find_by_id_or_error(id).await?;
        project.complete(&*self.clock);
        self.repository.update(&project).await?;
        tracing::info!(project_id = %id, "project completed");
        Ok(project)
    }

    /// Archives a project.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the project is not
    /// found or persistence fails.
    pub async fn archive(&self, id: ProjectId) -> PlanningServiceResult<Project> {
        let mut project = self.find_by_id_or_error(id).await?;
        project.archive(&*self.clock);
        self.repository.update(&project).await?;
        tracing::info!(project_id = %id, "project archived");
        Ok(project)
    }

    /// Deletes a project together with its sprints and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the project is not
    /// found or persistence fails.
    pub async fn delete(&self, id: ProjectId) -> PlanningServiceResult<()> {
        self.find_by_id_or_error(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(project_id = %id, "project deleted");
        Ok(())
    }

    async fn find_by_id_or_error(&self, id: ProjectId) -> PlanningServiceResult<Project> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::ProjectNotFound(id).into())
    }
}
