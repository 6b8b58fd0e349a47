//! Persistence strategies.
//!
//! The board applies every change to its own state first and then hands a
//! [`PersistRequest`] to the configured [`Persistence`]. When that fails the
//! board throws its optimistic state away and reloads the full task list via
//! [`Persistence::fetch_tasks`].

use crate::error::{BoardError, BoardResult};
use serde::Serialize;
use shared_types::{Project, ProjectsResponse, Task, TasksResponse};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistMethod {
    Post,
    Put,
    Patch,
    Delete,
}

impl PersistMethod {
    fn as_reqwest(&self) -> reqwest::Method {
        match self {
            PersistMethod::Post => reqwest::Method::POST,
            PersistMethod::Put => reqwest::Method::PUT,
            PersistMethod::Patch => reqwest::Method::PATCH,
            PersistMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One REST write mirroring a board mutation
#[derive(Debug, Clone, PartialEq)]
pub struct PersistRequest {
    pub method: PersistMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl PersistRequest {
    pub fn new(method: PersistMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body<T: Serialize>(mut self, body: &T) -> Self {
        // Unserializable bodies are dropped
        self.body = serde_json::to_value(body).ok();
        self
    }
}

pub trait Persistence: Send + Sync {
    fn persist(&self, request: &PersistRequest) -> BoardResult<()>;

    /// Authoritative task list used to revert a failed optimistic update
    fn fetch_tasks(&self) -> BoardResult<Vec<Task>>;

    fn fetch_projects(&self) -> BoardResult<Vec<Project>>;
}

/// Demo mode: nothing leaves the process
pub struct DemoPersistence;

impl Persistence for DemoPersistence {
    fn persist(&self, request: &PersistRequest) -> BoardResult<()> {
        tracing::debug!(
            method = ?request.method,
            path = %request.path,
            "Skipping persistence in demo mode"
        );
        Ok(())
    }

    fn fetch_tasks(&self) -> BoardResult<Vec<Task>> {
        Ok(Vec::new())
    }

    fn fetch_projects(&self) -> BoardResult<Vec<Project>> {
        Ok(Vec::new())
    }
}

/// Best-effort writes to a `board-api` server.
///
/// Uses a blocking client, so it must not be driven from inside an async runtime.
pub struct RemotePersistence {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemotePersistence {
    pub fn new(base_url: impl Into<String>) -> BoardResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| BoardError::Persistence(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Persistence for RemotePersistence {
    fn persist(&self, request: &PersistRequest) -> BoardResult<()> {
        let mut builder = self
            .client
            .request(request.method.as_reqwest(), self.url(&request.path));
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                BoardError::Persistence(format!(
                    "{} {}: {e}",
                    request.method.as_reqwest(),
                    request.path
                ))
            })?;

        Ok(())
    }

    fn fetch_tasks(&self) -> BoardResult<Vec<Task>> {
        let response = self
            .client
            .get(self.url("/api/tasks"))
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| BoardError::Persistence(format!("Failed to fetch tasks: {e}")))?;

        let body: TasksResponse = response
            .json()
            .map_err(|e| BoardError::Persistence(format!("Invalid task list: {e}")))?;

        Ok(body.tasks)
    }

    fn fetch_projects(&self) -> BoardResult<Vec<Project>> {
        let response = self
            .client
            .get(self.url("/api/projects"))
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| BoardError::Persistence(format!("Failed to fetch projects: {e}")))?;

        let body: ProjectsResponse = response
            .json()
            .map_err(|e| BoardError::Persistence(format!("Invalid project list: {e}")))?;

        Ok(body.projects)
    }
}
