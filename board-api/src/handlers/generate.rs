use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CommitGeneratedTasksRequest, GenerateTasksRequest, GeneratedTasksResponse};

use crate::handlers::board_error;
use crate::state::AppState;

pub async fn generate_tasks(
    state: web::Data<AppState>,
    request: web::Json<GenerateTasksRequest>,
) -> ActixResult<HttpResponse> {
    let tasks = state
        .board()?
        .generate_tasks(&request.goal)
        .map_err(board_error)?;

    Ok(HttpResponse::Ok().json(GeneratedTasksResponse { tasks }))
}

pub async fn commit_generated(
    state: web::Data<AppState>,
    request: web::Json<CommitGeneratedTasksRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let tasks = state
        .board()?
        .commit_generated(&request.project_id, &request.task_ids)
        .map_err(board_error)?;

    Ok(HttpResponse::Created().json(GeneratedTasksResponse { tasks }))
}
