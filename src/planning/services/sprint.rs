//! Sprint orchestration service.

use super::{
    CreateSprintRequest, PlanningServiceError, PlanningServiceResult, UpdateSprintRequest,
};
use crate::planning::{
    domain::{ProjectId, Sprint, SprintId, SprintTransition},
    ports::{ProjectRepository, RepositoryError, SprintRepository, SprintValidator},
    validation::DefaultPlanningValidator,
};
use mockable::Clock;
use std::sync::Arc;

/// Sprint lifecycle orchestration service.
///
/// Holds the project repository only to check that a sprint's owning
/// project exists before the sprint is stored.
#[derive(Clone)]
pub struct SprintService<S, P, C>
where
    S: SprintRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    sprints: Arc<S>,
    projects: Arc<P>,
    clock: Arc<C>,
    validator: Arc<dyn SprintValidator>,
}

impl<S, P, C> SprintService<S, P, C>
where
    S: SprintRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new sprint service using [`DefaultPlanningValidator`].
    #[must_use]
    pub fn new(sprints: Arc<S>, projects: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            sprints,
            projects,
            clock,
            validator: Arc::new(DefaultPlanningValidator::new()),
        }
    }

    /// Replaces the validator run on sprint creation and update.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn SprintValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Creates and stores a new sprint in `Planned` status.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the owning project
    /// does not exist or persistence fails, and
    /// [`PlanningServiceError::Validation`] when the sprint breaks a
    /// business rule.
    pub async fn create(&self, request: CreateSprintRequest) -> PlanningServiceResult<Sprint> {
        let CreateSprintRequest {
            project_id,
            name,
            goal,
            start_date,
            end_date,
        } = request;

        self.ensure_project_exists(project_id).await?;
        let sprint = Sprint::new(name, goal, start_date, end_date, project_id, &*self.clock);
        self.check(&sprint)?;

        let created = self.sprints.add(&sprint).await?;
        tracing::info!(
            sprint_id = %created.id(),
            project_id = %project_id,
            "sprint created"
        );
        Ok(created)
    }

    /// Finds a sprint by identifier.
    ///
    /// Returns `Ok(None)` when the sprint does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: SprintId) -> PlanningServiceResult<Option<Sprint>> {
        tracing::debug!(sprint_id = %id, "looking up sprint");
        Ok(self.sprints.find_by_id(id).await?)
    }

    /// Returns the sprints of a project, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> PlanningServiceResult<Vec<Sprint>> {
        tracing::debug!(project_id = %project_id, "listing sprints for project");
        Ok(self.sprints.find_by_project(project_id).await?)
    }

    /// Replaces a sprint's name, goal and schedule.
    ///
    /// The stored sprint is left untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Validation`] when the updated sprint
    /// breaks a business rule, or [`PlanningServiceError::Repository`] when
    /// the sprint is not found or persistence fails.
    pub async fn update_details(
        &self,
        id: SprintId,
        request: UpdateSprintRequest,
    ) -> PlanningServiceResult<Sprint> {
        let UpdateSprintRequest {
            name,
            goal,
            start_date,
            end_date,
        } = request;

        let mut sprint = self.find_by_id_or_error(id).await?;
        sprint.update_details(name, goal, start_date, end_date, &*self.clock);
        self.check(&sprint)?;
        self.sprints.update(&sprint).await?;
        tracing::info!(sprint_id = %id, "sprint details updated");
        Ok(sprint)
    }

    /// Moves a planned sprint to `Active`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Domain`] when the sprint is not
    /// planned, or [`PlanningServiceError::Repository`] when the sprint is
    /// not found or persistence fails.
    pub async fn start(&self, id: SprintId) -> PlanningServiceResult<Sprint> {
        self.transition(id, SprintTransition::Start).await
    }

    /// Moves an active sprint to `Completed`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Domain`] when the sprint is not
    /// active, or [`PlanningServiceError::Repository`] when the sprint is
    /// not found or persistence fails.
    pub async fn complete(&self, id: SprintId) -> PlanningServiceResult<Sprint> {
        self.transition(id, SprintTransition::Complete).await
    }

    /// Deletes a sprint. Its tasks stay in the project without a sprint.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Repository`] when the sprint is not
    /// found or persistence fails.
    pub async fn delete(&self, id: SprintId) -> PlanningServiceResult<()> {
        self.find_by_id_or_error(id).await?;
        self.sprints.delete(id).await?;
        tracing::info!(sprint_id = %id, "sprint deleted");
        Ok(())
    }

    async fn transition(
        &self,
        id: SprintId,
        transition: SprintTransition,
    ) -> PlanningServiceResult<Sprint> {
        let mut sprint = self.find_by_id_or_error(id).await?;
        let outcome = match transition {
            SprintTransition::Start => sprint.start(&*self.clock),
            SprintTransition::Complete => sprint.complete(&*self.clock),
        };
        if let Err(err) = outcome {
            tracing::warn!(sprint_id = %id, status = %sprint.status(), "{err}");
            return Err(err.into());
        }

        self.sprints.update(&sprint).await?;
        tracing::info!(sprint_id = %id, status = %sprint.status(), "sprint transitioned");
        Ok(sprint)
    }

    fn check(&self, sprint: &Sprint) -> PlanningServiceResult<()> {
        let report = self.validator.validate(sprint);
        if report.is_valid() {
            return Ok(());
        }
        tracing::warn!(sprint_id = %sprint.id(), %report, "sprint rejected by validation");
        Err(PlanningServiceError::Validation(report))
    }

    async fn ensure_project_exists(&self, project_id: ProjectId) -> PlanningServiceResult<()> {
        match self.projects.find_by_id(project_id).await? {
            Some(_) => Ok(()),
            None => Err(RepositoryError::ProjectNotFound(project_id).into()),
        }
    }

    async fn find_by_id_or_error(&self, id: SprintId) -> PlanningServiceResult<Sprint> {
        self.sprints
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::SprintNotFound(id).into())
    }
}
