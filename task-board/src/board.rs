use std::sync::Arc;

use chrono::Duration;
use shared_types::{
    AssigneeSnapshot, BoardColumns, ChangePriorityRequest, ChangeStatusRequest,
    CreateProjectRequest, CreateTaskRequest, DropTarget, Notification, Project, ProjectStatus,
    Task, TaskFilter, TaskPriority, TaskStatus, TeamMember, UpdateProjectProgressRequest,
    UpdateTaskRequest,
};

use crate::card::CardAction;
use crate::clock::{Clock, SystemClock};
use crate::collection::Collection;
use crate::drag::{self, DropOutcome, NoOpReason};
use crate::error::{BoardError, BoardResult};
use crate::filter;
use crate::generate::TaskTemplateGenerator;
use crate::notify::{Notifier, TracingNotifier};
use crate::persist::{DemoPersistence, PersistMethod, PersistRequest, Persistence};

const DEFAULT_PROJECT_DURATION_DAYS: i64 = 30;

/// Services the board talks to. Injected so tests can swap them out.
#[derive(Clone)]
pub struct Collaborators {
    pub notifier: Arc<dyn Notifier>,
    pub persistence: Arc<dyn Persistence>,
    pub clock: Arc<dyn Clock>,
}

impl Collaborators {
    /// Log notifications, persist nothing, use the system clock
    pub fn demo() -> Self {
        Self {
            notifier: Arc::new(TracingNotifier),
            persistence: Arc::new(DemoPersistence),
            clock: Arc::new(SystemClock),
        }
    }
}

/// Staged copy of a task under edit. The live task is untouched until
/// [`TaskBoard::save_edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    id: String,
    pub task: Task,
}

impl TaskDraft {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Task creation form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub open: bool,
    pub fields: CreateTaskRequest,
}

impl TaskForm {
    pub fn opened() -> Self {
        Self {
            open: true,
            fields: CreateTaskRequest::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    Updated(Task),
    Deleted(Task),
    Editing(TaskDraft),
}

#[derive(Debug, Clone, Copy)]
enum Resource {
    Tasks,
    Projects,
}

/// In-memory Kanban board: projects, tasks and the commands that change them.
///
/// Collections are replaced wholesale on every change; see [`Collection`].
pub struct TaskBoard {
    tasks: Collection<Task>,
    projects: Collection<Project>,
    team: Vec<TeamMember>,
    active_project_id: Option<String>,
    pending_generated: Vec<Task>,
    generator: TaskTemplateGenerator,
    notifier: Arc<dyn Notifier>,
    persistence: Arc<dyn Persistence>,
    clock: Arc<dyn Clock>,
}

impl TaskBoard {
    pub fn new(team: Vec<TeamMember>, collaborators: Collaborators) -> Self {
        Self {
            tasks: Collection::default(),
            projects: Collection::default(),
            team,
            active_project_id: None,
            pending_generated: Vec::new(),
            generator: TaskTemplateGenerator::with_defaults(),
            notifier: collaborators.notifier,
            persistence: collaborators.persistence,
            clock: collaborators.clock,
        }
    }

    /// Replace both collections, e.g. with sample data
    pub fn with_data(mut self, projects: Vec<Project>, tasks: Vec<Task>) -> Self {
        self.projects = Collection::new(projects);
        self.tasks = Collection::new(tasks);
        self
    }

    pub fn tasks(&self) -> &Collection<Task> {
        &self.tasks
    }

    pub fn projects(&self) -> &Collection<Project> {
        &self.projects
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn active_project_id(&self) -> Option<&str> {
        self.active_project_id.as_deref()
    }

    pub fn pending_generated(&self) -> &[Task] {
        &self.pending_generated
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Select the project the board is scoped to; `None` shows all projects
    pub fn set_active_project(&mut self, project_id: Option<&str>) -> BoardResult<()> {
        if let Some(id) = project_id {
            if self.find_project(id).is_none() {
                return Err(BoardError::project_not_found(id));
            }
        }
        self.active_project_id = project_id.map(str::to_string);
        Ok(())
    }

    pub fn columns(&self, filter: &TaskFilter) -> BoardColumns {
        filter::derive_columns(&self.tasks, filter)
    }

    pub fn create_task(&mut self, request: CreateTaskRequest) -> BoardResult<Task> {
        let title = request.title.trim().to_string();
        if title.is_empty() {
            return Err(self.reject("Task title is required"));
        }

        let Some(project_id) = request.project_id.filter(|id| !id.is_empty()) else {
            return Err(self.reject("Select a project for the task"));
        };
        let Some(project_name) = self.find_project(&project_id).map(|p| p.name.clone()) else {
            return Err(self.reject(format!("Unknown project: {project_id}")));
        };

        let now = self.clock.now().timestamp();
        let assignee_snapshot = request
            .assignee_id
            .as_deref()
            .and_then(|member_id| self.snapshot_for(member_id));

        let task = Task {
            id: self.allocate_task_id(request.id),
            title,
            description: request.description.filter(|d| !d.trim().is_empty()),
            status: request.status,
            priority: request.priority,
            created_at: now,
            due_date: request.due_date.unwrap_or(now),
            project_id: Some(project_id),
            assignee_id_ref: request.assignee_id,
            assignee_snapshot,
            related_module: request.related_module,
            tags: request.tags,
            checklists: None,
        };

        tracing::info!(task_id = %task.id, project = %project_name, "Task created");
        self.tasks = self.tasks.with_appended([task.clone()]);
        self.notify(
            "Task created",
            format!("\"{}\" was added to {}", task.title, project_name),
        );
        self.sync(
            Resource::Tasks,
            vec![PersistRequest::new(PersistMethod::Post, "/api/tasks")
                .with_body(&create_request_for(&task))],
        );

        Ok(task)
    }

    /// Submit the creation form. On success the form closes and its fields
    /// reset; on failure it stays as it was.
    pub fn submit_task_form(&mut self, form: &mut TaskForm) -> BoardResult<Task> {
        let task = self.create_task(form.fields.clone())?;
        form.open = false;
        form.fields = CreateTaskRequest::default();
        Ok(task)
    }

    pub fn begin_edit(&self, id: &str) -> BoardResult<TaskDraft> {
        let task = self
            .find_task(id)
            .cloned()
            .ok_or_else(|| BoardError::task_not_found(id))?;

        Ok(TaskDraft {
            id: task.id.clone(),
            task,
        })
    }

    /// Write a staged draft back. Any field may change, status included.
    pub fn save_edit(&mut self, draft: TaskDraft) -> BoardResult<Task> {
        let TaskDraft { id, mut task } = draft;
        let current = self
            .find_task(&id)
            .cloned()
            .ok_or_else(|| BoardError::task_not_found(&id))?;

        task.title = task.title.trim().to_string();
        if task.title.is_empty() {
            return Err(self.reject("Task title is required"));
        }
        if let Some(project_id) = task.project_id.as_deref() {
            if self.find_project(project_id).is_none() {
                return Err(self.reject(format!("Unknown project: {project_id}")));
            }
        }

        task.id = id;
        if task.assignee_id_ref != current.assignee_id_ref {
            task.assignee_snapshot = task
                .assignee_id_ref
                .as_deref()
                .and_then(|member_id| self.snapshot_for(member_id));
        }

        self.replace_task(task.clone())?;
        tracing::info!(task_id = %task.id, "Task updated");
        self.notify("Task updated", format!("\"{}\" was saved", task.title));
        self.sync(
            Resource::Tasks,
            vec![
                PersistRequest::new(PersistMethod::Put, format!("/api/tasks/{}", task.id))
                    .with_body(&UpdateTaskRequest { task: task.clone() }),
            ],
        );

        Ok(task)
    }

    pub fn delete_task(&mut self, id: &str) -> BoardResult<Task> {
        let task = self
            .find_task(id)
            .cloned()
            .ok_or_else(|| BoardError::task_not_found(id))?;

        self.tasks = self
            .tasks
            .without(|t| t.id == id)
            .ok_or_else(|| BoardError::task_not_found(id))?;

        tracing::info!(task_id = %id, "Task deleted");
        self.notify("Task deleted", format!("\"{}\" was removed", task.title));
        self.sync(
            Resource::Tasks,
            vec![PersistRequest::new(
                PersistMethod::Delete,
                format!("/api/tasks/{id}"),
            )],
        );

        Ok(task)
    }

    pub fn change_status(&mut self, id: &str, status: TaskStatus) -> BoardResult<Task> {
        let task = self
            .find_task(id)
            .cloned()
            .ok_or_else(|| BoardError::task_not_found(id))?;

        if task.status == status {
            return Ok(task);
        }
        self.rewrite_status(task, status, "Status updated")
    }

    pub fn mark_complete(&mut self, id: &str) -> BoardResult<Task> {
        self.change_status(id, TaskStatus::Done)
    }

    pub fn change_priority(&mut self, id: &str, priority: TaskPriority) -> BoardResult<Task> {
        let task = self
            .find_task(id)
            .cloned()
            .ok_or_else(|| BoardError::task_not_found(id))?;

        if task.priority == priority {
            return Ok(task);
        }

        let updated = Task { priority, ..task };
        self.replace_task(updated.clone())?;
        tracing::info!(task_id = %id, priority = priority.as_str(), "Task priority changed");
        self.notify(
            "Priority updated",
            format!("\"{}\" is now {} priority", updated.title, priority.as_str()),
        );
        self.sync(
            Resource::Tasks,
            vec![
                PersistRequest::new(PersistMethod::Patch, format!("/api/tasks/{id}/priority"))
                    .with_body(&ChangePriorityRequest { priority }),
            ],
        );

        Ok(updated)
    }

    /// Apply a drag release. Releases that mean nothing leave the board as is.
    pub fn move_task(&mut self, active_id: &str, target: &DropTarget) -> DropOutcome {
        let outcome = drag::plan_drop(&self.tasks, active_id, target);

        match &outcome {
            DropOutcome::NoOp(reason) => {
                tracing::debug!(task_id = %active_id, ?reason, "Drop ignored");
            }
            DropOutcome::Moved { task_id, to, .. } => {
                if let Some(task) = self.find_task(task_id).cloned() {
                    if let Err(e) = self.rewrite_status(task, *to, "Task moved") {
                        tracing::warn!(task_id = %task_id, "Failed to move task: {}", e);
                    }
                }
            }
        }

        outcome
    }

    /// Apply a drag release reported as the drag library's raw droppable id
    pub fn move_task_by_token(&mut self, active_id: &str, token: &str) -> DropOutcome {
        match drag::resolve_drop_token(token, &self.tasks) {
            Some(target) => self.move_task(active_id, &target),
            None => {
                tracing::debug!(task_id = %active_id, token = %token, "Unrecognized drop target");
                DropOutcome::NoOp(NoOpReason::UnrecognizedTarget)
            }
        }
    }

    /// Route one of a card's callback hooks
    pub fn dispatch_card_action(
        &mut self,
        task_id: &str,
        action: CardAction,
    ) -> BoardResult<CardOutcome> {
        match action {
            CardAction::ChangeStatus(status) => self
                .change_status(task_id, status)
                .map(CardOutcome::Updated),
            CardAction::ChangePriority(priority) => self
                .change_priority(task_id, priority)
                .map(CardOutcome::Updated),
            CardAction::Edit => self.begin_edit(task_id).map(CardOutcome::Editing),
            CardAction::Delete => self.delete_task(task_id).map(CardOutcome::Deleted),
        }
    }

    /// Create a project and make it the active one
    pub fn create_project(&mut self, request: CreateProjectRequest) -> BoardResult<Project> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(self.reject("Project name is required"));
        }

        let now = self.clock.now();
        let team_members = request
            .team_member_ids
            .iter()
            .filter_map(|id| self.team.iter().find(|member| &member.id == id).cloned())
            .collect();

        let project = Project {
            id: self.allocate_project_id(request.id.clone()),
            name,
            description: request.description.clone(),
            status: ProjectStatus::Active,
            created_at: now.timestamp(),
            start_date: request.start_date.unwrap_or(now.timestamp()),
            due_date: request.due_date.unwrap_or_else(|| {
                (now + Duration::days(DEFAULT_PROJECT_DURATION_DAYS)).timestamp()
            }),
            progress: 0,
            team_members,
            tags: request.tags.clone(),
            business_entity: request.business_entity.clone(),
        };

        tracing::info!(project_id = %project.id, "Project created");
        self.projects = self.projects.with_appended([project.clone()]);
        self.active_project_id = Some(project.id.clone());
        self.notify(
            "Project created",
            format!("\"{}\" is now the active project", project.name),
        );
        self.sync(
            Resource::Projects,
            vec![
                PersistRequest::new(PersistMethod::Post, "/api/projects").with_body(
                    &CreateProjectRequest {
                        id: Some(project.id.clone()),
                        ..request
                    },
                ),
            ],
        );

        Ok(project)
    }

    /// Set a project's progress by hand. Progress is never derived from tasks.
    pub fn set_project_progress(&mut self, id: &str, progress: u8) -> BoardResult<Project> {
        if progress > 100 {
            return Err(self.reject("Progress must be between 0 and 100"));
        }

        let project = self
            .find_project(id)
            .cloned()
            .ok_or_else(|| BoardError::project_not_found(id))?;
        let updated = Project { progress, ..project };

        self.projects = self
            .projects
            .with_replaced(|p| p.id == id, updated.clone())
            .ok_or_else(|| BoardError::project_not_found(id))?;

        tracing::info!(project_id = %id, progress, "Project progress updated");
        self.sync(
            Resource::Projects,
            vec![
                PersistRequest::new(PersistMethod::Patch, format!("/api/projects/{id}/progress"))
                    .with_body(&UpdateProjectProgressRequest { progress }),
            ],
        );

        Ok(updated)
    }

    /// Expand a goal into suggested tasks. The batch is held as pending until
    /// [`TaskBoard::commit_generated`].
    pub fn generate_tasks(&mut self, goal: &str) -> BoardResult<Vec<Task>> {
        if goal.trim().is_empty() {
            return Err(self.reject("Describe a goal to generate tasks"));
        }

        let tasks = self.generator.generate(goal, self.clock.now());
        tracing::info!(count = tasks.len(), "Generated task suggestions");
        self.notify(
            "Tasks generated",
            format!("{} tasks suggested for \"{}\"", tasks.len(), goal.trim()),
        );
        self.pending_generated = tasks.clone();

        Ok(tasks)
    }

    /// Add the selected pending tasks to `project_id` and clear the batch
    pub fn commit_generated(
        &mut self,
        project_id: &str,
        task_ids: &[String],
    ) -> BoardResult<Vec<Task>> {
        let Some(project_name) = self.find_project(project_id).map(|p| p.name.clone()) else {
            return Err(self.reject("Select a project for the generated tasks"));
        };
        if task_ids.is_empty() {
            return Err(self.reject("Select at least one task to add"));
        }

        let selected: Vec<Task> = self
            .pending_generated
            .iter()
            .filter(|task| task_ids.contains(&task.id))
            .map(|task| Task {
                project_id: Some(project_id.to_string()),
                ..task.clone()
            })
            .collect();
        if selected.is_empty() {
            return Err(self.reject("None of the selected tasks are pending"));
        }

        tracing::info!(
            count = selected.len(),
            project_id = %project_id,
            "Committing generated tasks"
        );
        self.tasks = self.tasks.with_appended(selected.iter().cloned());
        self.pending_generated.clear();
        self.notify(
            "Tasks added",
            format!("{} tasks added to {}", selected.len(), project_name),
        );
        self.sync(
            Resource::Tasks,
            selected
                .iter()
                .map(|task| {
                    PersistRequest::new(PersistMethod::Post, "/api/tasks")
                        .with_body(&create_request_for(task))
                })
                .collect(),
        );

        Ok(selected)
    }

    fn rewrite_status(&mut self, task: Task, status: TaskStatus, title: &str) -> BoardResult<Task> {
        let from = task.status;
        let updated = Task { status, ..task };
        self.replace_task(updated.clone())?;

        tracing::info!(task_id = %updated.id, from = %from, to = %status, "Task status changed");
        self.notify(title, drag::describe_move(&updated.title, from, status));
        self.sync(
            Resource::Tasks,
            vec![PersistRequest::new(
                PersistMethod::Patch,
                format!("/api/tasks/{}/status", updated.id),
            )
            .with_body(&ChangeStatusRequest { status })],
        );

        Ok(updated)
    }

    fn replace_task(&mut self, task: Task) -> BoardResult<()> {
        let next = self
            .tasks
            .with_replaced(|t| t.id == task.id, task.clone())
            .ok_or_else(|| BoardError::task_not_found(&task.id))?;
        self.tasks = next;
        Ok(())
    }

    fn snapshot_for(&self, member_id: &str) -> Option<AssigneeSnapshot> {
        self.team
            .iter()
            .find(|member| member.id == member_id)
            .map(|member| AssigneeSnapshot {
                name: member.name.clone(),
                avatar: member.avatar.clone(),
            })
    }

    fn allocate_task_id(&self, requested: Option<String>) -> String {
        requested
            .filter(|id| !id.is_empty() && self.find_task(id).is_none())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }

    fn allocate_project_id(&self, requested: Option<String>) -> String {
        requested
            .filter(|id| !id.is_empty() && self.find_project(id).is_none())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }

    fn notify(&self, title: &str, description: impl Into<String>) {
        self.notifier.notify(&Notification::new(title, description));
    }

    fn reject(&self, message: impl Into<String>) -> BoardError {
        let message = message.into();
        tracing::info!("Rejected command: {}", message);
        self.notify("Validation error", message.clone());
        BoardError::Validation(message)
    }

    /// Push writes to the persistence strategy. The first failure reverts the
    /// affected collection to the server's copy and skips the remaining writes.
    fn sync(&mut self, resource: Resource, requests: Vec<PersistRequest>) {
        for request in &requests {
            if let Err(e) = self.persistence.persist(request) {
                tracing::warn!(
                    method = ?request.method,
                    path = %request.path,
                    "Failed to persist change: {}",
                    e
                );
                self.revert(resource);
                return;
            }
        }
    }

    fn revert(&mut self, resource: Resource) {
        let reloaded = match resource {
            Resource::Tasks => match self.persistence.fetch_tasks() {
                Ok(tasks) => {
                    self.tasks = Collection::new(tasks);
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Resource::Projects => match self.persistence.fetch_projects() {
                Ok(projects) => {
                    self.projects = Collection::new(projects);
                    let active_missing = self
                        .active_project_id
                        .as_deref()
                        .is_some_and(|id| self.find_project(id).is_none());
                    if active_missing {
                        self.active_project_id = None;
                    }
                    Ok(())
                }
                Err(e) => Err(e),
            },
        };

        match reloaded {
            Ok(()) => {
                tracing::info!(?resource, "Reverted to server state");
                self.notify(
                    "Sync failed",
                    "Your change could not be saved. The board was reloaded.",
                );
            }
            Err(e) => {
                tracing::warn!(?resource, "Failed to reload server state: {}", e);
                self.notify(
                    "Sync failed",
                    "Your change could not be saved and the board could not be reloaded.",
                );
            }
        }
    }
}

fn create_request_for(task: &Task) -> CreateTaskRequest {
    CreateTaskRequest {
        id: Some(task.id.clone()),
        project_id: task.project_id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        status: task.status,
        priority: task.priority,
        due_date: Some(task.due_date),
        assignee_id: task.assignee_id_ref.clone(),
        related_module: task.related_module.clone(),
        tags: task.tags.clone(),
    }
}
