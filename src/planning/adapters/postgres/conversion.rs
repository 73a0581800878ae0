//! Conversions between planning aggregates and Diesel rows.

use super::models::{NewProjectRow, NewSprintRow, NewTaskRow, ProjectRow, SprintRow, TaskRow};
use crate::planning::{
    domain::{
        PersistedProjectData, PersistedSprintData, PersistedTaskData, Project, ProjectId,
        ProjectStatus, Sprint, SprintId, SprintStatus, Task, TaskId, TaskPriority, TaskStatus,
        UserId,
    },
    ports::{RepositoryError, RepositoryResult},
};

pub fn project_to_new_row(project: &Project) -> NewProjectRow {
    NewProjectRow {
        id: project.id().into_inner(),
        name: project.name().to_owned(),
        description: project.description().to_owned(),
        start_date: project.start_date(),
        end_date: project.end_date(),
        status: project.status().as_str().to_owned(),
        created_at: project.created_at(),
        updated_at: project.updated_at(),
    }
}

pub fn row_to_project(row: ProjectRow) -> RepositoryResult<Project> {
    let status = ProjectStatus::try_from(row.status.as_str())
        .map_err(RepositoryError::invalid_persisted_data)?;
    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::from_uuid(row.id),
        name: row.name,
        description: row.description,
        start_date: row.start_date,
        end_date: row.end_date,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

pub fn sprint_to_new_row(sprint: &Sprint) -> NewSprintRow {
    NewSprintRow {
        id: sprint.id().into_inner(),
        name: sprint.name().to_owned(),
        goal: sprint.goal().to_owned(),
        start_date: sprint.start_date(),
        end_date: sprint.end_date(),
        status: sprint.status().as_str().to_owned(),
        project_id: sprint.project_id().into_inner(),
        created_at: sprint.created_at(),
        updated_at: sprint.updated_at(),
    }
}

pub fn row_to_sprint(row: SprintRow) -> RepositoryResult<Sprint> {
    let status = SprintStatus::try_from(row.status.as_str())
        .map_err(RepositoryError::invalid_persisted_data)?;
    Ok(Sprint::from_persisted(PersistedSprintData {
        id: SprintId::from_uuid(row.id),
        name: row.name,
        goal: row.goal,
        start_date: row.start_date,
        end_date: row.end_date,
        status,
        project_id: ProjectId::from_uuid(row.project_id),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

pub fn task_to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        priority: task.priority().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        estimated_hours: task.estimated_hours(),
        actual_hours: task.actual_hours(),
        project_id: task.project_id().into_inner(),
        sprint_id: task.sprint_id().map(SprintId::into_inner),
        assigned_to: task.assigned_to().map(UserId::into_inner),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

pub fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    let priority = TaskPriority::try_from(row.priority.as_str())
        .map_err(RepositoryError::invalid_persisted_data)?;
    let status = TaskStatus::try_from(row.status.as_str())
        .map_err(RepositoryError::invalid_persisted_data)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        priority,
        status,
        estimated_hours: row.estimated_hours,
        actual_hours: row.actual_hours,
        project_id: ProjectId::from_uuid(row.project_id),
        sprint_id: row.sprint_id.map(SprintId::from_uuid),
        assigned_to: row.assigned_to.map(UserId::from_uuid),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
