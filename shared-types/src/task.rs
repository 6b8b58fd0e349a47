use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Task status. Each status is one Kanban column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire name, e.g. `in-progress`
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    /// Human readable name with hyphens rendered as spaces
    pub fn label(&self) -> String {
        self.as_str().replace('-', " ")
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [
            TaskPriority::Low,
            TaskPriority::Medium,
            TaskPriority::High,
            TaskPriority::Urgent,
        ]
        .into_iter()
        .find(|priority| priority.as_str() == value)
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

/// Copy of a team member taken when the task was assigned.
///
/// Renaming the member later does not touch this copy, so old tasks keep
/// showing who was assigned at the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssigneeSnapshot {
    pub name: String,
    pub avatar: String,
}

/// One entry of a task checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Task entity shown on the Kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_at: i64,
    pub due_date: i64,
    /// `None` means unassigned; such tasks never show up in project-filtered views
    pub project_id: Option<String>,
    pub assignee_id_ref: Option<String>,
    pub assignee_snapshot: Option<AssigneeSnapshot>,
    pub related_module: Option<String>,
    pub tags: Vec<String>,
    pub checklists: Option<Vec<ChecklistItem>>,
}

impl Task {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Request to create a new task. Only the title and project are needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateTaskRequest {
    /// Id allocated by the client; kept when not already taken
    #[serde(default)]
    pub id: Option<String>,
    pub project_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: Option<i64>,
    pub assignee_id: Option<String>,
    pub related_module: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to save an edited task. The whole staged task replaces the live one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateTaskRequest {
    pub task: Task,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeStatusRequest {
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangePriorityRequest {
    pub priority: TaskPriority,
}

/// Response containing a list of tasks
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let status: TaskStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(status, TaskStatus::Done);
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        assert!(serde_json::from_str::<TaskStatus>("\"review\"").is_err());
        assert_eq!(TaskStatus::parse("cancelled"), None);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(TaskStatus::InProgress.label(), "in progress");
        assert_eq!(TaskStatus::Todo.label(), "todo");
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(TaskPriority::parse("urgent"), Some(TaskPriority::Urgent));
        assert_eq!(TaskPriority::parse("critical"), None);
    }

    #[test]
    fn test_create_request_defaults() {
        let json = r#"{"project_id":null,"title":"Draft copy","priority":"high","due_date":null}"#;
        let request: CreateTaskRequest = serde_json::from_str(json).unwrap();
        assert!(request.tags.is_empty());
        assert!(request.id.is_none());
        assert_eq!(request.priority, TaskPriority::High);
    }

    #[test]
    fn test_create_request_needs_only_title_and_project() {
        let request: CreateTaskRequest =
            serde_json::from_str(r#"{"title":"Draft copy","project_id":"proj-1"}"#).unwrap();
        assert_eq!(request.status, TaskStatus::Todo);
        assert_eq!(request.priority, TaskPriority::Medium);
        assert_eq!(request.project_id.as_deref(), Some("proj-1"));
        assert!(request.due_date.is_none());
    }
}
