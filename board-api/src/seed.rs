//! Demo data the dashboard starts with when `seed_sample_data` is on.

use chrono::{DateTime, Duration, Utc};
use shared_types::{
    AssigneeSnapshot, BusinessEntityRef, ChecklistItem, Project, ProjectStatus, Task,
    TaskPriority, TaskStatus, TeamMember,
};

pub fn team() -> Vec<TeamMember> {
    [
        ("tm-1", "Maya Patel", "/avatars/maya.png"),
        ("tm-2", "Jordan Reyes", "/avatars/jordan.png"),
        ("tm-3", "Chris Novak", "/avatars/chris.png"),
        ("tm-4", "Priya Shah", "/avatars/priya.png"),
    ]
    .into_iter()
    .map(|(id, name, avatar)| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
    })
    .collect()
}

pub fn projects(team: &[TeamMember], now: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: "proj-1".to_string(),
            name: "Website Relaunch".to_string(),
            description: "Redesign and relaunch the company website".to_string(),
            status: ProjectStatus::Active,
            created_at: (now - Duration::days(20)).timestamp(),
            start_date: (now - Duration::days(14)).timestamp(),
            due_date: (now + Duration::days(45)).timestamp(),
            progress: 35,
            team_members: team.iter().take(3).cloned().collect(),
            tags: vec!["web".to_string(), "brand".to_string()],
            business_entity: Some(BusinessEntityRef {
                id: "biz-1".to_string(),
                name: "Northwind Studio".to_string(),
            }),
        },
        Project {
            id: "proj-2".to_string(),
            name: "Q4 Ad Campaign".to_string(),
            description: "Paid social and search campaign for the holiday season".to_string(),
            status: ProjectStatus::Planning,
            created_at: (now - Duration::days(5)).timestamp(),
            start_date: now.timestamp(),
            due_date: (now + Duration::days(60)).timestamp(),
            progress: 10,
            team_members: team.iter().skip(2).cloned().collect(),
            tags: vec!["ads".to_string()],
            business_entity: None,
        },
    ]
}

pub fn tasks(team: &[TeamMember], now: DateTime<Utc>) -> Vec<Task> {
    let snapshot = |index: usize| {
        team.get(index).map(|member| AssigneeSnapshot {
            name: member.name.clone(),
            avatar: member.avatar.clone(),
        })
    };
    let member_id = |index: usize| team.get(index).map(|member| member.id.clone());
    let days = |n: i64| (now + Duration::days(n)).timestamp();

    vec![
        Task {
            id: "task-1".to_string(),
            title: "Finalize homepage wireframes".to_string(),
            description: Some("Desktop and mobile layouts for review".to_string()),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            created_at: days(-10),
            due_date: days(2),
            project_id: Some("proj-1".to_string()),
            assignee_id_ref: member_id(0),
            assignee_snapshot: snapshot(0),
            related_module: Some("Design".to_string()),
            tags: tags(&["design", "web"]),
            checklists: Some(vec![
                ChecklistItem {
                    id: "chk-1".to_string(),
                    text: "Desktop layout".to_string(),
                    completed: true,
                },
                ChecklistItem {
                    id: "chk-2".to_string(),
                    text: "Mobile layout".to_string(),
                    completed: false,
                },
            ]),
        },
        Task {
            id: "task-2".to_string(),
            title: "Write About page copy".to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            created_at: days(-8),
            due_date: days(7),
            project_id: Some("proj-1".to_string()),
            assignee_id_ref: member_id(1),
            assignee_snapshot: snapshot(1),
            related_module: Some("Marketing".to_string()),
            tags: tags(&["copy", "web"]),
            checklists: None,
        },
        Task {
            id: "task-3".to_string(),
            title: "Migrate blog posts".to_string(),
            description: Some("Move existing articles to the new CMS".to_string()),
            status: TaskStatus::Done,
            priority: TaskPriority::Low,
            created_at: days(-12),
            due_date: days(-3),
            project_id: Some("proj-1".to_string()),
            assignee_id_ref: member_id(2),
            assignee_snapshot: snapshot(2),
            related_module: Some("Operations".to_string()),
            tags: tags(&["web"]),
            checklists: None,
        },
        Task {
            id: "task-4".to_string(),
            title: "Define campaign audiences".to_string(),
            description: Some("Segments for search and paid social".to_string()),
            status: TaskStatus::Todo,
            priority: TaskPriority::Urgent,
            created_at: days(-4),
            due_date: days(0),
            project_id: Some("proj-2".to_string()),
            assignee_id_ref: member_id(3),
            assignee_snapshot: snapshot(3),
            related_module: Some("Advertising".to_string()),
            tags: tags(&["ads", "research"]),
            checklists: None,
        },
        Task {
            id: "task-5".to_string(),
            title: "Draft ad creatives".to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            created_at: days(-2),
            due_date: days(12),
            project_id: Some("proj-2".to_string()),
            assignee_id_ref: None,
            assignee_snapshot: None,
            related_module: Some("Advertising".to_string()),
            tags: tags(&["ads", "design"]),
            checklists: Some(vec![]),
        },
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
