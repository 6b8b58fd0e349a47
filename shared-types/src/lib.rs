use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod board;
pub mod project;
pub mod task;
pub mod team;

pub use board::{
    BoardColumns, BoardResponse, CommitGeneratedTasksRequest, DropTarget, GenerateTasksRequest,
    GeneratedTasksResponse, MoveTaskRequest, MoveTaskResponse, Notification,
    NotificationsResponse, TaskFilter, VocabularyResponse, COLUMN_TOKEN_PREFIX,
};
pub use project::{
    BusinessEntityRef, CreateProjectRequest, Project, ProjectStatus, ProjectsResponse,
    UpdateProjectProgressRequest,
};
pub use task::{
    AssigneeSnapshot, ChangePriorityRequest, ChangeStatusRequest, ChecklistItem,
    CreateTaskRequest, Task, TaskPriority, TaskStatus, TasksResponse, UpdateTaskRequest,
};
pub use team::{TeamMember, TeamResponse};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}
