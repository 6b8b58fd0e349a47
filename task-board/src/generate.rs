//! Template-based task generation.
//!
//! A goal description is scanned for a fixed set of keywords; each keyword
//! found expands into its canned task list. This is plain pattern matching,
//! no model is involved.

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use shared_types::{Task, TaskPriority, TaskStatus};

/// Days between consecutive due dates within one keyword group
const DUE_DATE_STEP_DAYS: i64 = 2;

struct KeywordTemplate {
    keyword: &'static str,
    pattern: Regex,
    titles: &'static [&'static str],
}

const TEMPLATES: &[(&str, &[&str])] = &[
    (
        "website",
        &[
            "Define website goals and audience",
            "Create sitemap and wireframes",
            "Design homepage mockup",
            "Write website copy",
            "Build and test responsive pages",
        ],
    ),
    (
        "marketing",
        &[
            "Define target audience segments",
            "Draft marketing campaign brief",
            "Plan content calendar",
            "Set up campaign tracking",
        ],
    ),
    (
        "product",
        &[
            "Collect product requirements",
            "Prioritize feature backlog",
            "Create product roadmap",
            "Plan user testing sessions",
        ],
    ),
    (
        "launch",
        &[
            "Set launch date and milestones",
            "Prepare launch announcement",
            "Brief sales and support teams",
            "Run launch readiness review",
        ],
    ),
    (
        "research",
        &[
            "Define research questions",
            "Identify sources and participants",
            "Conduct interviews and desk research",
            "Summarize research findings",
        ],
    ),
];

const FALLBACK_TITLES: &[&str] = &[
    "Define project scope and objectives",
    "Break goal into milestones",
    "Assign owners and deadlines",
];

pub struct TaskTemplateGenerator {
    templates: Vec<KeywordTemplate>,
}

impl TaskTemplateGenerator {
    /// Generator with the built-in keyword table
    pub fn with_defaults() -> Self {
        let templates = TEMPLATES
            .iter()
            .filter_map(|&(keyword, titles)| {
                let pattern = Regex::new(&format!("(?i){}", regex::escape(keyword)));
                match pattern {
                    Ok(pattern) => Some(KeywordTemplate {
                        keyword,
                        pattern,
                        titles,
                    }),
                    Err(e) => {
                        tracing::error!("Invalid keyword pattern {}: {}", keyword, e);
                        None
                    }
                }
            })
            .collect();

        Self { templates }
    }

    /// Keywords found in `goal`, in table order
    pub fn matched_keywords(&self, goal: &str) -> Vec<&'static str> {
        self.templates
            .iter()
            .filter(|template| template.pattern.is_match(goal))
            .map(|template| template.keyword)
            .collect()
    }

    /// Expand `goal` into a batch of unassigned todo tasks
    pub fn generate(&self, goal: &str, now: DateTime<Utc>) -> Vec<Task> {
        let matched: Vec<&KeywordTemplate> = self
            .templates
            .iter()
            .filter(|template| template.pattern.is_match(goal))
            .collect();

        if matched.is_empty() {
            tracing::debug!("No keyword matched, using fallback planning tasks");
            return expand_group(FALLBACK_TITLES, None, now);
        }

        matched
            .into_iter()
            .flat_map(|template| expand_group(template.titles, Some(template.keyword), now))
            .collect()
    }
}

/// High for the first task of a group, medium for the next two, low after that
pub fn priority_for_position(index: usize) -> TaskPriority {
    match index {
        0 => TaskPriority::High,
        1 | 2 => TaskPriority::Medium,
        _ => TaskPriority::Low,
    }
}

fn expand_group(titles: &[&str], keyword: Option<&str>, now: DateTime<Utc>) -> Vec<Task> {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| {
            let offset = Duration::days((index as i64 + 1) * DUE_DATE_STEP_DAYS);
            Task {
                id: uuid::Uuid::new_v4().to_string(),
                title: title.to_string(),
                description: None,
                status: TaskStatus::Todo,
                priority: priority_for_position(index),
                created_at: now.timestamp(),
                due_date: (now + offset).timestamp(),
                project_id: None,
                assignee_id_ref: None,
                assignee_snapshot: None,
                related_module: None,
                tags: keyword.map(|k| vec![k.to_string()]).unwrap_or_default(),
                checklists: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-17T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_keywords_match_case_insensitively() {
        let generator = TaskTemplateGenerator::with_defaults();
        assert_eq!(
            generator.matched_keywords("Plan a PRODUCT Launch"),
            vec!["product", "launch"]
        );
        assert!(generator.matched_keywords("Tidy the garage").is_empty());
    }

    #[test]
    fn test_product_launch_expands_both_groups() {
        let generator = TaskTemplateGenerator::with_defaults();
        let tasks = generator.generate("Plan a product launch", now());

        let product_titles = TEMPLATES[2].1;
        let launch_titles = TEMPLATES[3].1;
        assert_eq!(tasks.len(), product_titles.len() + launch_titles.len());

        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        for expected in product_titles.iter().chain(launch_titles.iter()) {
            assert!(titles.contains(expected), "missing {expected}");
        }

        assert!(tasks.iter().all(|t| t.status == TaskStatus::Todo));
        assert!(tasks.iter().all(|t| t.project_id.is_none()));

        for keyword in ["product", "launch"] {
            let group: Vec<&Task> = tasks.iter().filter(|t| t.has_tag(keyword)).collect();
            assert_eq!(group[0].priority, TaskPriority::High);
            assert_eq!(group[1].priority, TaskPriority::Medium);
            assert_eq!(group[2].priority, TaskPriority::Medium);
            assert_eq!(group[3].priority, TaskPriority::Low);
            assert!(group.windows(2).all(|w| w[0].due_date < w[1].due_date));
            assert!(group[0].due_date > now().timestamp());
        }
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let generator = TaskTemplateGenerator::with_defaults();
        let tasks = generator.generate("Organize the offsite", now());

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title, FALLBACK_TITLES[0]);
        assert_eq!(tasks[0].priority, TaskPriority::High);
        assert_eq!(tasks[2].priority, TaskPriority::Medium);
        assert_eq!(
            tasks[0].due_date,
            (now() + Duration::days(DUE_DATE_STEP_DAYS)).timestamp()
        );
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let generator = TaskTemplateGenerator::with_defaults();
        let tasks = generator.generate("website marketing", now());
        let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
    }
}
