use std::collections::BTreeSet;

use shared_types::{BoardColumns, Task, TaskFilter, TaskStatus};

/// Whether `task` passes every criterion in `filter`
pub fn matches(task: &Task, filter: &TaskFilter) -> bool {
    matches_search(task, &filter.search)
        && filter
            .project_id
            .as_ref()
            .map_or(true, |project| task.project_id.as_ref() == Some(project))
        && filter
            .priority
            .map_or(true, |priority| task.priority == priority)
        && filter
            .module
            .as_ref()
            .map_or(true, |module| task.related_module.as_ref() == Some(module))
        && filter.tags.iter().all(|tag| task.has_tag(tag))
}

fn matches_search(task: &Task, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task
            .description
            .as_ref()
            .is_some_and(|description| description.to_lowercase().contains(&needle))
}

/// Visible subset of `tasks`, in input order
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| matches(task, filter))
        .cloned()
        .collect()
}

/// Partition tasks into the three board columns by status
pub fn group_by_status(tasks: Vec<Task>) -> BoardColumns {
    let mut columns = BoardColumns::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => columns.todo.push(task),
            TaskStatus::InProgress => columns.in_progress.push(task),
            TaskStatus::Done => columns.done.push(task),
        }
    }
    columns
}

pub fn derive_columns(tasks: &[Task], filter: &TaskFilter) -> BoardColumns {
    group_by_status(filter_tasks(tasks, filter))
}

/// Sorted, de-duplicated tags across all tasks
pub fn collect_tags(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .flat_map(|task| task.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, de-duplicated module names across all tasks
pub fn collect_modules(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .filter_map(|task| task.related_module.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::TaskPriority;

    fn task(id: &str, title: &str, status: TaskStatus, tags: &[&str]) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            status,
            priority: TaskPriority::Medium,
            created_at: 0,
            due_date: 0,
            project_id: Some("p-1".to_string()),
            assignee_id_ref: None,
            assignee_snapshot: None,
            related_module: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            checklists: None,
        }
    }

    fn sample() -> Vec<Task> {
        let mut brief = task("t-1", "Write brief", TaskStatus::Todo, &["copy", "urgent"]);
        brief.description = Some("Outline the Launch messaging".to_string());
        brief.related_module = Some("Marketing".to_string());

        let mut ads = task("t-2", "Set up ads", TaskStatus::InProgress, &["ads"]);
        ads.priority = TaskPriority::High;
        ads.related_module = Some("Advertising".to_string());

        let mut orphan = task("t-3", "Tidy backlog", TaskStatus::Done, &[]);
        orphan.project_id = None;

        let mut review = task("t-4", "Review copy", TaskStatus::Done, &["copy"]);
        review.project_id = Some("p-2".to_string());

        vec![brief, ads, orphan, review]
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_passes_everything() {
        let tasks = sample();
        assert_eq!(filter_tasks(&tasks, &TaskFilter::default()), tasks);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let tasks = sample();

        let filter = TaskFilter {
            search: "LAUNCH".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["t-1"]);

        let filter = TaskFilter {
            search: "copy".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["t-4"]);
    }

    #[test]
    fn test_project_filter_excludes_unassigned() {
        let tasks = sample();
        let filter = TaskFilter {
            project_id: Some("p-1".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["t-1", "t-2"]);
    }

    #[test]
    fn test_priority_and_module_filters() {
        let tasks = sample();

        let filter = TaskFilter {
            priority: Some(TaskPriority::High),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["t-2"]);

        let filter = TaskFilter {
            module: Some("Marketing".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["t-1"]);
    }

    #[test]
    fn test_tag_filter_is_a_conjunction() {
        let tasks = sample();

        let filter = TaskFilter {
            tags: vec!["copy".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["t-1", "t-4"]);

        let filter = TaskFilter {
            tags: vec!["copy".to_string(), "urgent".to_string()],
            ..Default::default()
        };
        let visible = filter_tasks(&tasks, &filter);
        assert_eq!(ids(&visible), vec!["t-1"]);
        assert!(visible
            .iter()
            .all(|t| filter.tags.iter().all(|tag| t.has_tag(tag))));
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let tasks = sample();
        let snapshot = tasks.clone();
        let filter = TaskFilter {
            search: "e".to_string(),
            tags: vec!["copy".to_string()],
            ..Default::default()
        };

        let first = filter_tasks(&tasks, &filter);
        let second = filter_tasks(&tasks, &filter);
        assert_eq!(first, second);
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_columns_partition_the_filtered_set() {
        let tasks = sample();
        let filter = TaskFilter::default();
        let columns = derive_columns(&tasks, &filter);

        assert_eq!(columns.len(), filter_tasks(&tasks, &filter).len());
        assert_eq!(ids(&columns.todo), vec!["t-1"]);
        assert_eq!(ids(&columns.in_progress), vec!["t-2"]);
        assert_eq!(ids(&columns.done), vec!["t-3", "t-4"]);

        for status in TaskStatus::ALL {
            assert!(columns.column(status).iter().all(|t| t.status == status));
        }
    }

    #[test]
    fn test_vocabularies() {
        let tasks = sample();
        assert_eq!(collect_tags(&tasks), vec!["ads", "copy", "urgent"]);
        assert_eq!(collect_modules(&tasks), vec!["Advertising", "Marketing"]);
    }
}
