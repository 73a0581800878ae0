//! In-memory arena store for planning entities.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::planning::{
    domain::{Project, ProjectId, Sprint, SprintId, Task, TaskId},
    ports::{
        ProjectRepository, RepositoryError, RepositoryResult, SprintRepository, TaskRepository,
    },
};

/// Thread-safe in-memory store shared by the three planning repositories.
///
/// All entities live in one arena behind a single lock so cascades
/// (project delete, sprint delete) are applied atomically.
///
/// # Examples
///
/// ```
/// use sprintboard::planning::adapters::memory::InMemoryPlanningStore;
///
/// let store = InMemoryPlanningStore::new();
/// let projects = store.projects();
/// let tasks = store.tasks();
/// # let _ = (projects, tasks);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanningStore {
    state: Arc<RwLock<PlanningState>>,
}

#[derive(Debug, Default)]
struct PlanningState {
    projects: HashMap<ProjectId, Project>,
    sprints: HashMap<SprintId, Sprint>,
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryPlanningStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a project repository backed by this store.
    #[must_use]
    pub fn projects(&self) -> InMemoryProjectRepository {
        InMemoryProjectRepository {
            state: Arc::clone(&self.state),
        }
    }

    /// Returns a sprint repository backed by this store.
    #[must_use]
    pub fn sprints(&self) -> InMemorySprintRepository {
        InMemorySprintRepository {
            state: Arc::clone(&self.state),
        }
    }

    /// Returns a task repository backed by this store.
    #[must_use]
    pub fn tasks(&self) -> InMemoryTaskRepository {
        InMemoryTaskRepository {
            state: Arc::clone(&self.state),
        }
    }
}

/// In-memory project repository.
#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<PlanningState>>,
}

/// In-memory sprint repository.
#[derive(Debug, Clone)]
pub struct InMemorySprintRepository {
    state: Arc<RwLock<PlanningState>>,
}

/// In-memory task repository.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<PlanningState>>,
}

fn read(state: &RwLock<PlanningState>) -> RepositoryResult<RwLockReadGuard<'_, PlanningState>> {
    state
        .read()
        .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
}

fn write(state: &RwLock<PlanningState>) -> RepositoryResult<RwLockWriteGuard<'_, PlanningState>> {
    state
        .write()
        .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
}

/// Sorts entities by creation time, breaking ties by identifier.
fn sorted_by_creation<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by_key(key);
    items
}

fn ensure_sprint_exists(state: &PlanningState, task: &Task) -> RepositoryResult<()> {
    match task.sprint_id() {
        Some(sprint_id) if !state.sprints.contains_key(&sprint_id) => {
            Err(RepositoryError::SprintNotFound(sprint_id))
        }
        _ => Ok(()),
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        let state = read(&self.state)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Project>> {
        let state = read(&self.state)?;
        let projects = state.projects.values().cloned().collect();
        Ok(sorted_by_creation(projects, |p: &Project| (p.created_at(), p.id())))
    }

    async fn add(&self, project: &Project) -> RepositoryResult<Project> {
        let mut state = write(&self.state)?;
        if state.projects.contains_key(&project.id()) {
            return Err(RepositoryError::DuplicateProject(project.id()));
        }
        state.projects.insert(project.id(), project.clone());
        Ok(project.clone())
    }

    async fn update(&self, project: &Project) -> RepositoryResult<()> {
        let mut state = write(&self.state)?;
        let stored = state
            .projects
            .get_mut(&project.id())
            .ok_or(RepositoryError::ProjectNotFound(project.id()))?;
        *stored = project.clone();
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> RepositoryResult<()> {
        let mut state = write(&self.state)?;
        if state.projects.remove(&id).is_none() {
            return Ok(());
        }
        state.sprints.retain(|_, sprint| sprint.project_id() != id);
        state.tasks.retain(|_, task| task.project_id() != id);
        Ok(())
    }
}

#[async_trait]
impl SprintRepository for InMemorySprintRepository {
    async fn find_by_id(&self, id: SprintId) -> RepositoryResult<Option<Sprint>> {
        let state = read(&self.state)?;
        Ok(state.sprints.get(&id).cloned())
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Sprint>> {
        let state = read(&self.state)?;
        let sprints = state
            .sprints
            .values()
            .filter(|sprint| sprint.project_id() == project_id)
            .cloned()
            .collect();
        Ok(sorted_by_creation(sprints, |s: &Sprint| (s.created_at(), s.id())))
    }

    async fn add(&self, sprint: &Sprint) -> RepositoryResult<Sprint> {
        let mut state = write(&self.state)?;
        if state.sprints.contains_key(&sprint.id()) {
            return Err(RepositoryError::DuplicateSprint(sprint.id()));
        }
        if !state.projects.contains_key(&sprint.project_id()) {
            return Err(RepositoryError::ProjectNotFound(sprint.project_id()));
        }
        state.sprints.insert(sprint.id(), sprint.clone());
        Ok(sprint.clone())
    }

    async fn update(&self, sprint: &Sprint) -> RepositoryResult<()> {
        let mut state = write(&self.state)?;
        let stored = state
            .sprints
            .get_mut(&sprint.id())
            .ok_or(RepositoryError::SprintNotFound(sprint.id()))?;
        *stored = sprint.clone();
        Ok(())
    }

    async fn delete(&self, id: SprintId) -> RepositoryResult<()> {
        let mut state = write(&self.state)?;
        if state.sprints.remove(&id).is_none() {
            return Ok(());
        }
        state
            .tasks
            .values_mut()
            .filter(|task| task.sprint_id() == Some(id))
            .for_each(Task::detach_from_deleted_sprint);
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = read(&self.state)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>> {
        let state = read(&self.state)?;
        let tasks = state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect();
        Ok(sorted_by_creation(tasks, |t: &Task| (t.created_at(), t.id())))
    }

    async fn find_by_sprint(&self, sprint_id: SprintId) -> RepositoryResult<Vec<Task>> {
        let state = read(&self.state)?;
        let tasks = state
            .tasks
            .values()
            .filter(|task| task.sprint_id() == Some(sprint_id))
            .cloned()
            .collect();
        Ok(sorted_by_creation(tasks, |t: &Task| (t.created_at(), t.id())))
    }

    async fn add(&self, task: &Task) -> RepositoryResult<Task> {
        let mut state = write(&self.state)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(RepositoryError::DuplicateTask(task.id()));
        }
        if !state.projects.contains_key(&task.project_id()) {
            return Err(RepositoryError::ProjectNotFound(task.project_id()));
        }
        ensure_sprint_exists(&state, task)?;
        state.tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let mut state = write(&self.state)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(RepositoryError::TaskNotFound(task.id()));
        }
        ensure_sprint_exists(&state, task)?;
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let mut state = write(&self.state)?;
        state.tasks.remove(&id);
        Ok(())
    }
}
