use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::team::TeamMember;

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Planning,
    OnHold,
    Completed,
}

/// Reference to a business entity owned by the CRM side of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BusinessEntityRef {
    pub id: String,
    pub name: String,
}

/// Project entity grouping tasks on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: i64,
    pub start_date: i64,
    pub due_date: i64,
    /// Manually curated, 0-100. Not derived from task completion.
    pub progress: u8,
    pub team_members: Vec<TeamMember>,
    pub tags: Vec<String>,
    pub business_entity: Option<BusinessEntityRef>,
}

/// Request to create a new project
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateProjectRequest {
    /// Id allocated by the client; kept when not already taken
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: Option<i64>,
    pub due_date: Option<i64>,
    #[serde(default)]
    pub team_member_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub business_entity: Option<BusinessEntityRef>,
}

/// Request to set a project's progress by hand
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateProjectProgressRequest {
    pub progress: u8,
}

/// Response containing a list of projects
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
    pub active_project_id: Option<String>,
}
