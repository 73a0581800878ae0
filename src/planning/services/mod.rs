//! Application services for project, sprint and task orchestration.
//!
//! Each service loads an entity, applies a domain method, runs the
//! configured validator where one applies, and persists the result.

mod error;
mod overview;
mod project;
mod requests;
mod seed;
mod sprint;
mod task;

pub use error::{PlanningServiceError, PlanningServiceResult, ServiceErrorKind};
pub use overview::{ProjectOverview, ProjectOverviewService};
pub use project::ProjectService;
pub use requests::{
    CreateProjectRequest, CreateSprintRequest, CreateTaskRequest, UpdateSprintRequest,
    UpdateTaskRequest,
};
pub use seed::seed_demo_project;
pub use sprint::SprintService;
pub use task::TaskService;
