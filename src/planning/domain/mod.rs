//! Domain model for project planning.
//!
//! Projects own sprints and tasks; tasks may additionally be planned into a
//! sprint of the same project. Entities reference each other by identifier
//! only and keep all infrastructure concerns outside the domain boundary.

mod error;
mod ids;
mod project;
mod sprint;
mod task;

pub use error::{ParseStatusError, PlanningDomainError};
pub use ids::{ProjectId, SprintId, TaskId, UserId};
pub use project::{PersistedProjectData, Project, ProjectStatus};
pub use sprint::{PersistedSprintData, Sprint, SprintStatus, SprintTransition};
pub use task::{PersistedTaskData, Task, TaskPriority, TaskStatus};
