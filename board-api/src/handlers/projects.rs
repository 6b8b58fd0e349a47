use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateProjectRequest, ProjectsResponse, UpdateProjectProgressRequest};

use crate::handlers::board_error;
use crate::state::AppState;

pub async fn list_projects(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let board = state.board()?;

    Ok(HttpResponse::Ok().json(ProjectsResponse {
        projects: board.projects().to_vec(),
        active_project_id: board.active_project_id().map(str::to_string),
    }))
}

pub async fn create_project(
    state: web::Data<AppState>,
    request: web::Json<CreateProjectRequest>,
) -> ActixResult<HttpResponse> {
    let project = state
        .board()?
        .create_project(request.into_inner())
        .map_err(board_error)?;

    Ok(HttpResponse::Created().json(project))
}

pub async fn update_progress(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<UpdateProjectProgressRequest>,
) -> ActixResult<HttpResponse> {
    let project_id = path.into_inner();
    let project = state
        .board()?
        .set_project_progress(&project_id, request.progress)
        .map_err(board_error)?;

    Ok(HttpResponse::Ok().json(project))
}
