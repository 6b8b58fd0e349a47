use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::task::{Task, TaskPriority, TaskStatus};

/// Prefix the dashboard's drag library puts in front of column droppable ids
pub const COLUMN_TOKEN_PREFIX: &str = "column-";

/// Where a dragged card was released
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "id", rename_all = "kebab-case")]
pub enum DropTarget {
    Task(String),
    Column(TaskStatus),
}

impl DropTarget {
    /// Droppable id of a column, e.g. `column-in-progress`
    pub fn column_token(status: TaskStatus) -> String {
        format!("{}{}", COLUMN_TOKEN_PREFIX, status.as_str())
    }
}

/// Filter criteria for the board. `None` selectors mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaskFilter {
    #[serde(default)]
    pub search: String,
    pub project_id: Option<String>,
    pub priority: Option<TaskPriority>,
    pub module: Option<String>,
    /// Every listed tag must be present on a task
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Filtered tasks partitioned by status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BoardColumns {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl BoardColumns {
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Title/description pair handed to the toast sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Request to apply a drag release. Either a resolved target or the raw
/// droppable token from the drag library must be given.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoveTaskRequest {
    pub target: Option<DropTarget>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoveTaskResponse {
    pub moved: bool,
    pub task: Option<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BoardResponse {
    pub columns: BoardColumns,
    pub total: usize,
}

/// Tag and module vocabularies for the filter pickers
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VocabularyResponse {
    pub tags: Vec<String>,
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenerateTasksRequest {
    pub goal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedTasksResponse {
    pub tasks: Vec<Task>,
}

/// Confirms a subset of the pending generated batch into a project
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommitGeneratedTasksRequest {
    pub project_id: String,
    pub task_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_target_serialization() {
        let target = DropTarget::Column(TaskStatus::InProgress);
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, r#"{"kind":"column","id":"in-progress"}"#);

        let task: DropTarget = serde_json::from_str(r#"{"kind":"task","id":"t-1"}"#).unwrap();
        assert_eq!(task, DropTarget::Task("t-1".to_string()));
    }

    #[test]
    fn test_column_token() {
        assert_eq!(DropTarget::column_token(TaskStatus::Done), "column-done");
        assert_eq!(
            DropTarget::column_token(TaskStatus::InProgress),
            "column-in-progress"
        );
    }

    #[test]
    fn test_filter_defaults_from_empty_object() {
        let filter: TaskFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, TaskFilter::default());
    }
}
