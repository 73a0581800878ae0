//! `PostgreSQL` repository implementations for planning storage.

use super::{
    conversion::{
        project_to_new_row, row_to_project, row_to_sprint, row_to_task, sprint_to_new_row,
        task_to_new_row,
    },
    models::{ProjectRow, SprintRow, TaskRow},
    schema::{projects, sprints, tasks},
};
use crate::planning::{
    domain::{Project, ProjectId, Sprint, SprintId, Task, TaskId},
    ports::{
        ProjectRepository, RepositoryError, RepositoryResult, SprintRepository, TaskRepository,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type shared by the planning adapters.
pub type PlanningPgPool = Pool<ConnectionManager<PgConnection>>;

const SPRINTS_PROJECT_FK: &str = "sprints_project_id_fkey";
const TASKS_PROJECT_FK: &str = "tasks_project_id_fkey";
const TASKS_SPRINT_FK: &str = "tasks_sprint_id_fkey";

async fn run_blocking<F, T>(pool: &PlanningPgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(RepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(RepositoryError::persistence)?
}

fn is_constraint(info: &dyn DatabaseErrorInformation, name: &str) -> bool {
    info.constraint_name()
        .is_some_and(|constraint| constraint == name)
}

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PlanningPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PlanningPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        run_blocking(&self.pool, move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.into_inner()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Project>> {
        run_blocking(&self.pool, move |connection| {
            let rows = projects::table
                .order((projects::created_at.asc(), projects::id.asc()))
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn add(&self, project: &Project) -> RepositoryResult<Project> {
        let project_id = project.id();
        let new_row = project_to_new_row(project);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(projects::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::DuplicateProject(project_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await?;
        Ok(project.clone())
    }

    async fn update(&self, project: &Project) -> RepositoryResult<()> {
        let project_id = project.id();
        let row = project_to_new_row(project);

        run_blocking(&self.pool, move |connection| {
            let updated_count =
                diesel::update(projects::table.filter(projects::id.eq(project_id.into_inner())))
                    .set((
                        projects::name.eq(&row.name),
                        projects::description.eq(&row.description),
                        projects::start_date.eq(row.start_date),
                        projects::end_date.eq(row.end_date),
                        projects::status.eq(&row.status),
                        projects::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(RepositoryError::ProjectNotFound(project_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            diesel::delete(projects::table.filter(projects::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

/// `PostgreSQL`-backed sprint repository.
#[derive(Debug, Clone)]
pub struct PostgresSprintRepository {
    pool: PlanningPgPool,
}

impl PostgresSprintRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PlanningPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SprintRepository for PostgresSprintRepository {
    async fn find_by_id(&self, id: SprintId) -> RepositoryResult<Option<Sprint>> {
        run_blocking(&self.pool, move |connection| {
            let row = sprints::table
                .filter(sprints::id.eq(id.into_inner()))
                .select(SprintRow::as_select())
                .first::<SprintRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_sprint).transpose()
        })
        .await
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Sprint>> {
        run_blocking(&self.pool, move |connection| {
            let rows = sprints::table
                .filter(sprints::project_id.eq(project_id.into_inner()))
                .order((sprints::created_at.asc(), sprints::id.asc()))
                .select(SprintRow::as_select())
                .load::<SprintRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_sprint).collect()
        })
        .await
    }

    async fn add(&self, sprint: &Sprint) -> RepositoryResult<Sprint> {
        let sprint_id = sprint.id();
        let project_id = sprint.project_id();
        let new_row = sprint_to_new_row(sprint);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(sprints::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::DuplicateSprint(sprint_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info)
                        if is_constraint(info.as_ref(), SPRINTS_PROJECT_FK) =>
                    {
                        RepositoryError::ProjectNotFound(project_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await?;
        Ok(sprint.clone())
    }

    async fn update(&self, sprint: &Sprint) -> RepositoryResult<()> {
        let sprint_id = sprint.id();
        let row = sprint_to_new_row(sprint);

        run_blocking(&self.pool, move |connection| {
            let updated_count =
                diesel::update(sprints::table.filter(sprints::id.eq(sprint_id.into_inner())))
                    .set((
                        sprints::name.eq(&row.name),
                        sprints::goal.eq(&row.goal),
                        sprints::start_date.eq(row.start_date),
                        sprints::end_date.eq(row.end_date),
                        sprints::status.eq(&row.status),
                        sprints::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(RepositoryError::SprintNotFound(sprint_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: SprintId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            diesel::delete(sprints::table.filter(sprints::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PlanningPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PlanningPgPool) -> Self {
        Self { pool }
    }
}

/// Maps a task write failure onto the typed repository errors.
fn map_task_write_error(err: DieselError, task: &Task) -> RepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RepositoryError::DuplicateTask(task.id())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info)
            if is_constraint(info.as_ref(), TASKS_PROJECT_FK) =>
        {
            RepositoryError::ProjectNotFound(task.project_id())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info)
            if is_constraint(info.as_ref(), TASKS_SPRINT_FK) =>
        {
            task.sprint_id().map_or_else(
                || RepositoryError::persistence(err),
                RepositoryError::SprintNotFound,
            )
        }
        _ => RepositoryError::persistence(err),
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project_id.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_sprint(&self, sprint_id: SprintId) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::sprint_id.eq(sprint_id.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn add(&self, task: &Task) -> RepositoryResult<Task> {
        let new_row = task_to_new_row(task);
        let snapshot = task.clone();

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_task_write_error(err, &snapshot))?;
            Ok(())
        })
        .await?;
        Ok(task.clone())
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let row = task_to_new_row(task);
        let snapshot = task.clone();

        run_blocking(&self.pool, move |connection| {
            let updated_count = diesel::update(tasks::table.filter(tasks::id.eq(row.id)))
                .set((
                    tasks::title.eq(&row.title),
                    tasks::description.eq(&row.description),
                    tasks::priority.eq(&row.priority),
                    tasks::status.eq(&row.status),
                    tasks::estimated_hours.eq(row.estimated_hours),
                    tasks::actual_hours.eq(row.actual_hours),
                    tasks::sprint_id.eq(row.sprint_id),
                    tasks::assigned_to.eq(row.assigned_to),
                    tasks::updated_at.eq(row.updated_at),
                ))
                .execute(connection)
                .map_err(|err| map_task_write_error(err, &snapshot))?;

            if updated_count == 0 {
                return Err(RepositoryError::TaskNotFound(snapshot.id()));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}
