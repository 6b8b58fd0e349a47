use chrono::{DateTime, TimeZone};
use shared_types::{AssigneeSnapshot, Task, TaskPriority, TaskStatus};

/// Whole calendar days from `now` until the due date, both taken as dates in
/// `now`'s timezone. Due later today is 0; negative means overdue.
/// A timestamp outside chrono's range is logged and counted as due today.
pub fn days_remaining<Tz: TimeZone>(due_date: i64, now: &DateTime<Tz>) -> i64 {
    let Some(due) = DateTime::from_timestamp(due_date, 0) else {
        tracing::warn!(due_date, "Due date is out of range, treating it as due today");
        return 0;
    };
    let due = due.with_timezone(&now.timezone());

    (due.date_naive() - now.date_naive()).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBadge {
    Overdue(i64),
    DueToday,
    /// One or two days left, shown in the warning style
    DueSoon(i64),
    DaysLeft(i64),
}

impl DueBadge {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => DueBadge::Overdue(d.abs()),
            0 => DueBadge::DueToday,
            1..=2 => DueBadge::DueSoon(days),
            _ => DueBadge::DaysLeft(days),
        }
    }

    pub fn label(&self) -> String {
        match self {
            DueBadge::Overdue(days) => format!("{} overdue", plural_days(*days)),
            DueBadge::DueToday => "Due today".to_string(),
            DueBadge::DueSoon(days) | DueBadge::DaysLeft(days) => {
                format!("{} left", plural_days(*days))
            }
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, DueBadge::DueSoon(_))
    }
}

fn plural_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Share of checked checklist items, rounded to a whole percent.
/// No checklist or an empty one is 0%.
pub fn checklist_completion(task: &Task) -> u8 {
    let Some(items) = task.checklists.as_deref() else {
        return 0;
    };
    if items.is_empty() {
        return 0;
    }

    let completed = items.iter().filter(|item| item.completed).count();
    (100.0 * completed as f64 / items.len() as f64).round() as u8
}

/// Requests a card can raise towards its board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    ChangeStatus(TaskStatus),
    ChangePriority(TaskPriority),
    Edit,
    Delete,
}

/// Everything the dashboard needs to render one draggable card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status_label: String,
    pub priority: TaskPriority,
    pub due_badge: DueBadge,
    pub checklist_percent: u8,
    pub assignee: Option<AssigneeSnapshot>,
    pub tags: Vec<String>,
}

impl TaskCard {
    pub fn new<Tz: TimeZone>(task: &Task, now: &DateTime<Tz>) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            status_label: task.status.label(),
            priority: task.priority,
            due_badge: DueBadge::from_days(days_remaining(task.due_date, now)),
            checklist_percent: checklist_completion(task),
            assignee: task.assignee_snapshot.clone(),
            tags: task.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use shared_types::ChecklistItem;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn task_due(due_date: i64) -> Task {
        Task {
            id: "t-1".to_string(),
            title: "Draft copy".to_string(),
            description: None,
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            created_at: 0,
            due_date,
            project_id: None,
            assignee_id_ref: None,
            assignee_snapshot: None,
            related_module: None,
            tags: vec![],
            checklists: None,
        }
    }

    fn checklist(states: &[bool]) -> Vec<ChecklistItem> {
        states
            .iter()
            .enumerate()
            .map(|(i, completed)| ChecklistItem {
                id: format!("c-{i}"),
                text: format!("Step {i}"),
                completed: *completed,
            })
            .collect()
    }

    #[test]
    fn test_due_later_today_is_zero() {
        let now = utc("2026-10-17T08:00:00Z");
        let due = utc("2026-10-17T23:59:00Z").timestamp();
        assert_eq!(days_remaining(due, &now), 0);
        assert_eq!(DueBadge::from_days(0), DueBadge::DueToday);
    }

    #[test]
    fn test_days_are_counted_between_midnights() {
        let now = utc("2026-10-17T23:30:00Z");
        assert_eq!(
            days_remaining(utc("2026-10-18T00:10:00Z").timestamp(), &now),
            1
        );
        assert_eq!(
            days_remaining(utc("2026-10-14T12:00:00Z").timestamp(), &now),
            -3
        );
    }

    #[test]
    fn test_dates_use_the_callers_timezone() {
        let offset = FixedOffset::east_opt(5 * 3600).unwrap();
        // 21:00 UTC is already the next day at +05:00
        let now = utc("2026-10-17T12:00:00Z").with_timezone(&offset);
        let due = utc("2026-10-17T21:00:00Z").timestamp();
        assert_eq!(days_remaining(due, &now), 1);
    }

    #[test]
    fn test_out_of_range_due_date_counts_as_today() {
        let now = utc("2026-10-17T08:00:00Z");
        assert_eq!(days_remaining(i64::MAX, &now), 0);
        assert_eq!(days_remaining(i64::MIN, &now), 0);
    }

    #[test]
    fn test_badges() {
        assert_eq!(DueBadge::from_days(-3), DueBadge::Overdue(3));
        assert_eq!(DueBadge::from_days(-3).label(), "3 days overdue");
        assert_eq!(DueBadge::from_days(1).label(), "1 day left");
        assert!(DueBadge::from_days(2).is_warning());
        assert_eq!(DueBadge::from_days(3), DueBadge::DaysLeft(3));
        assert!(!DueBadge::from_days(3).is_warning());
    }

    #[test]
    fn test_checklist_completion() {
        let mut task = task_due(0);
        assert_eq!(checklist_completion(&task), 0);

        task.checklists = Some(vec![]);
        assert_eq!(checklist_completion(&task), 0);

        task.checklists = Some(checklist(&[true, false, false]));
        assert_eq!(checklist_completion(&task), 33);

        task.checklists = Some(checklist(&[true, true, false]));
        assert_eq!(checklist_completion(&task), 67);

        task.checklists = Some(checklist(&[true, true]));
        assert_eq!(checklist_completion(&task), 100);
    }

    #[test]
    fn test_card_view() {
        let now = utc("2026-10-17T08:00:00Z");
        let mut task = task_due(utc("2026-10-19T10:00:00Z").timestamp());
        task.checklists = Some(checklist(&[true, false]));

        let card = TaskCard::new(&task, &now);
        assert_eq!(card.status_label, "in progress");
        assert_eq!(card.due_badge, DueBadge::DueSoon(2));
        assert_eq!(card.checklist_percent, 50);
    }
}
