//! Drag-and-drop status transitions.
//!
//! The drag library reports the dragged card and the droppable it was
//! released over as plain strings. [`resolve_drop_token`] turns the second one
//! into a [`DropTarget`] once at the boundary; [`plan_drop`] then decides what
//! the release means without touching any state.

use shared_types::{DropTarget, Task, TaskStatus, COLUMN_TOKEN_PREFIX};

/// Why a release did not change anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// Released over the card that was being dragged
    SameElement,
    /// Released over another card; cards carry no ordering
    TaskTarget,
    /// Released over the column the card is already in
    SameColumn,
    /// The dragged id is not on the board
    UnknownTask,
    /// The droppable id is neither a column nor a card
    UnrecognizedTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Moved {
        task_id: String,
        from: TaskStatus,
        to: TaskStatus,
    },
    NoOp(NoOpReason),
}

/// Resolve a raw droppable id. Column tokens take precedence over a task id
/// that happens to be spelled the same way.
pub fn resolve_drop_token(token: &str, tasks: &[Task]) -> Option<DropTarget> {
    if let Some(status) = token
        .strip_prefix(COLUMN_TOKEN_PREFIX)
        .and_then(TaskStatus::parse)
    {
        return Some(DropTarget::Column(status));
    }

    tasks
        .iter()
        .any(|task| task.id == token)
        .then(|| DropTarget::Task(token.to_string()))
}

pub fn plan_drop(tasks: &[Task], active_id: &str, target: &DropTarget) -> DropOutcome {
    let Some(task) = tasks.iter().find(|task| task.id == active_id) else {
        return DropOutcome::NoOp(NoOpReason::UnknownTask);
    };

    match target {
        DropTarget::Task(id) if id == active_id => DropOutcome::NoOp(NoOpReason::SameElement),
        DropTarget::Task(_) => DropOutcome::NoOp(NoOpReason::TaskTarget),
        DropTarget::Column(status) if *status == task.status => {
            DropOutcome::NoOp(NoOpReason::SameColumn)
        }
        DropTarget::Column(status) => DropOutcome::Moved {
            task_id: task.id.clone(),
            from: task.status,
            to: *status,
        },
    }
}

/// Toast text for a completed move
pub fn describe_move(title: &str, from: TaskStatus, to: TaskStatus) -> String {
    format!("\"{}\" moved from {} to {}", title, from.label(), to.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::TaskPriority;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: None,
            status,
            priority: TaskPriority::Low,
            created_at: 0,
            due_date: 0,
            project_id: None,
            assignee_id_ref: None,
            assignee_snapshot: None,
            related_module: None,
            tags: vec![],
            checklists: None,
        }
    }

    #[test]
    fn test_resolve_column_tokens() {
        let tasks = vec![task("a", TaskStatus::Todo)];
        assert_eq!(
            resolve_drop_token("column-in-progress", &tasks),
            Some(DropTarget::Column(TaskStatus::InProgress))
        );
        assert_eq!(
            resolve_drop_token("column-done", &tasks),
            Some(DropTarget::Column(TaskStatus::Done))
        );
    }

    #[test]
    fn test_resolve_task_and_unknown_tokens() {
        let tasks = vec![task("a", TaskStatus::Todo)];
        assert_eq!(
            resolve_drop_token("a", &tasks),
            Some(DropTarget::Task("a".to_string()))
        );
        assert_eq!(resolve_drop_token("column-review", &tasks), None);
        assert_eq!(resolve_drop_token("missing", &tasks), None);
    }

    #[test]
    fn test_column_token_wins_over_colliding_task_id() {
        let tasks = vec![task("column-done", TaskStatus::Todo)];
        assert_eq!(
            resolve_drop_token("column-done", &tasks),
            Some(DropTarget::Column(TaskStatus::Done))
        );
    }

    #[test]
    fn test_plan_moves_into_other_column() {
        let tasks = vec![task("a", TaskStatus::Todo)];
        assert_eq!(
            plan_drop(&tasks, "a", &DropTarget::Column(TaskStatus::Done)),
            DropOutcome::Moved {
                task_id: "a".to_string(),
                from: TaskStatus::Todo,
                to: TaskStatus::Done,
            }
        );
    }

    #[test]
    fn test_plan_no_ops() {
        let tasks = vec![task("a", TaskStatus::Todo), task("b", TaskStatus::Done)];

        assert_eq!(
            plan_drop(&tasks, "a", &DropTarget::Task("a".to_string())),
            DropOutcome::NoOp(NoOpReason::SameElement)
        );
        assert_eq!(
            plan_drop(&tasks, "a", &DropTarget::Task("b".to_string())),
            DropOutcome::NoOp(NoOpReason::TaskTarget)
        );
        assert_eq!(
            plan_drop(&tasks, "a", &DropTarget::Column(TaskStatus::Todo)),
            DropOutcome::NoOp(NoOpReason::SameColumn)
        );
        assert_eq!(
            plan_drop(&tasks, "zzz", &DropTarget::Column(TaskStatus::Done)),
            DropOutcome::NoOp(NoOpReason::UnknownTask)
        );
    }

    #[test]
    fn test_describe_move_uses_spaces() {
        assert_eq!(
            describe_move("Draft copy", TaskStatus::InProgress, TaskStatus::Done),
            "\"Draft copy\" moved from in progress to done"
        );
    }
}
