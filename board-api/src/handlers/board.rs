use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{
    BoardResponse, NotificationsResponse, TaskFilter, TaskPriority, VocabularyResponse,
};
use task_board::filter;

use crate::handlers::bad_request;
use crate::state::AppState;

/// Selector value that disables a filter
const ALL: &str = "all";

/// Query string of the board view. Selectors accept `all`; `tags` is comma-separated.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    pub search: Option<String>,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub module: Option<String>,
    pub tags: Option<String>,
}

fn selector(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != ALL)
}

impl BoardQuery {
    /// Build the filter. Without a `project` parameter the active project is used.
    pub fn into_filter(self, active_project: Option<&str>) -> Result<TaskFilter, String> {
        let project_id = match self.project {
            Some(project) => selector(Some(project)),
            None => active_project.map(str::to_string),
        };

        let priority = match selector(self.priority) {
            Some(value) => Some(
                TaskPriority::parse(&value).ok_or_else(|| format!("Unknown priority: {value}"))?,
            ),
            None => None,
        };

        let tags = self
            .tags
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(TaskFilter {
            search: self
                .search
                .filter(|search| !search.trim().is_empty())
                .unwrap_or_default(),
            project_id,
            priority,
            module: selector(self.module),
            tags,
        })
    }
}

pub async fn get_board(
    state: web::Data<AppState>,
    query: web::Query<BoardQuery>,
) -> ActixResult<HttpResponse> {
    let board = state.board()?;
    let filter = query
        .into_inner()
        .into_filter(board.active_project_id())
        .map_err(bad_request)?;

    let columns = board.columns(&filter);
    let total = columns.len();

    Ok(HttpResponse::Ok().json(BoardResponse { columns, total }))
}

pub async fn get_vocabulary(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let board = state.board()?;

    Ok(HttpResponse::Ok().json(VocabularyResponse {
        tags: filter::collect_tags(board.tasks()),
        modules: filter::collect_modules(board.tasks()),
    }))
}

/// Hand out notifications raised since the last call
pub async fn drain_notifications(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(NotificationsResponse {
        notifications: state.notifications.drain(),
    }))
}
