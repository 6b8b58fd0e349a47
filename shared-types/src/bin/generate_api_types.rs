use shared_types::*;
use std::fs;
use std::path::PathBuf;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the dashboard
    let mut types = Vec::new();

    // Task types
    types.push(clean_type(Task::export_to_string()?));
    types.push(clean_type(TaskStatus::export_to_string()?));
    types.push(clean_type(TaskPriority::export_to_string()?));
    types.push(clean_type(AssigneeSnapshot::export_to_string()?));
    types.push(clean_type(ChecklistItem::export_to_string()?));
    types.push(clean_type(CreateTaskRequest::export_to_string()?));
    types.push(clean_type(UpdateTaskRequest::export_to_string()?));
    types.push(clean_type(ChangeStatusRequest::export_to_string()?));
    types.push(clean_type(ChangePriorityRequest::export_to_string()?));
    types.push(clean_type(TasksResponse::export_to_string()?));

    // Project types
    types.push(clean_type(Project::export_to_string()?));
    types.push(clean_type(ProjectStatus::export_to_string()?));
    types.push(clean_type(BusinessEntityRef::export_to_string()?));
    types.push(clean_type(CreateProjectRequest::export_to_string()?));
    types.push(clean_type(UpdateProjectProgressRequest::export_to_string()?));
    types.push(clean_type(ProjectsResponse::export_to_string()?));

    // Team types
    types.push(clean_type(TeamMember::export_to_string()?));
    types.push(clean_type(TeamResponse::export_to_string()?));

    // Board types
    types.push(clean_type(DropTarget::export_to_string()?));
    types.push(clean_type(TaskFilter::export_to_string()?));
    types.push(clean_type(BoardColumns::export_to_string()?));
    types.push(clean_type(BoardResponse::export_to_string()?));
    types.push(clean_type(Notification::export_to_string()?));
    types.push(clean_type(NotificationsResponse::export_to_string()?));
    types.push(clean_type(MoveTaskRequest::export_to_string()?));
    types.push(clean_type(MoveTaskResponse::export_to_string()?));
    types.push(clean_type(VocabularyResponse::export_to_string()?));
    types.push(clean_type(GenerateTasksRequest::export_to_string()?));
    types.push(clean_type(GeneratedTasksResponse::export_to_string()?));
    types.push(clean_type(CommitGeneratedTasksRequest::export_to_string()?));
    types.push(clean_type(ErrorResponse::export_to_string()?));

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("../dashboard/src/api-types"));
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Everything lands in one file, so per-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
