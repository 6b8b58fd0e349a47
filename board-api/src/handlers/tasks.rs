use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    ChangePriorityRequest, ChangeStatusRequest, CreateTaskRequest, MoveTaskRequest,
    MoveTaskResponse, TasksResponse, UpdateTaskRequest,
};

use crate::handlers::{bad_request, board_error};
use crate::state::AppState;
use task_board::DropOutcome;

pub async fn list_tasks(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let board = state.board()?;
    Ok(HttpResponse::Ok().json(TasksResponse {
        tasks: board.tasks().to_vec(),
    }))
}

pub async fn create_task(
    state: web::Data<AppState>,
    request: web::Json<CreateTaskRequest>,
) -> ActixResult<HttpResponse> {
    let task = state
        .board()?
        .create_task(request.into_inner())
        .map_err(board_error)?;

    Ok(HttpResponse::Created().json(task))
}

pub async fn update_task(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<UpdateTaskRequest>,
) -> ActixResult<HttpResponse> {
    let task_id = path.into_inner();
    let mut board = state.board()?;

    let mut draft = board.begin_edit(&task_id).map_err(board_error)?;
    draft.task = request.into_inner().task;
    let task = board.save_edit(draft).map_err(board_error)?;

    Ok(HttpResponse::Ok().json(task))
}

pub async fn delete_task(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let task_id = path.into_inner();
    state
        .board()?
        .delete_task(&task_id)
        .map_err(board_error)?;

    Ok(HttpResponse::NoContent().finish())
}

pub async fn change_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<ChangeStatusRequest>,
) -> ActixResult<HttpResponse> {
    let task_id = path.into_inner();
    let task = state
        .board()?
        .change_status(&task_id, request.status)
        .map_err(board_error)?;

    Ok(HttpResponse::Ok().json(task))
}

pub async fn change_priority(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<ChangePriorityRequest>,
) -> ActixResult<HttpResponse> {
    let task_id = path.into_inner();
    let task = state
        .board()?
        .change_priority(&task_id, request.priority)
        .map_err(board_error)?;

    Ok(HttpResponse::Ok().json(task))
}

pub async fn complete_task(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let task_id = path.into_inner();
    let task = state
        .board()?
        .mark_complete(&task_id)
        .map_err(board_error)?;

    Ok(HttpResponse::Ok().json(task))
}

/// Apply a drag release. Releases that change nothing still answer 200.
pub async fn move_task(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<MoveTaskRequest>,
) -> ActixResult<HttpResponse> {
    let task_id = path.into_inner();
    let request = request.into_inner();
    let mut board = state.board()?;

    let outcome = match (request.target, request.token) {
        (Some(target), _) => board.move_task(&task_id, &target),
        (None, Some(token)) => board.move_task_by_token(&task_id, &token),
        (None, None) => return Err(bad_request("Either target or token is required")),
    };

    let moved = matches!(outcome, DropOutcome::Moved { .. });
    Ok(HttpResponse::Ok().json(MoveTaskResponse {
        moved,
        task: board.find_task(&task_id).cloned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::routes;
    use actix_web::{http::StatusCode, test, App};
    use shared_types::{ErrorResponse, Task, TaskStatus};

    fn state(seed: bool) -> web::Data<AppState> {
        web::Data::new(AppState::new(&BoardConfig {
            seed_sample_data: seed,
            ..BoardConfig::default()
        }))
    }

    #[actix_web::test]
    async fn test_create_and_move_task() {
        let state = state(true);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(routes::configure))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(CreateTaskRequest {
                project_id: Some("proj-1".to_string()),
                title: "Draft copy".to_string(),
                ..Default::default()
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let task: Task = test::read_body_json(resp).await;
        assert_eq!(task.status, TaskStatus::Todo);

        let req = test::TestRequest::post()
            .uri(&format!("/api/tasks/{}/move", task.id))
            .set_json(serde_json::json!({ "token": "column-done" }))
            .to_request();
        let body: MoveTaskResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.moved);
        assert_eq!(body.task.unwrap().status, TaskStatus::Done);

        let req = test::TestRequest::post()
            .uri(&format!("/api/tasks/{}/move", task.id))
            .set_json(serde_json::json!({ "target": { "kind": "task", "id": task.id } }))
            .to_request();
        let body: MoveTaskResponse = test::call_and_read_body_json(&app, req).await;
        assert!(!body.moved);
    }

    #[actix_web::test]
    async fn test_create_with_title_and_project_only() {
        let state = state(true);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(routes::configure))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(serde_json::json!({ "title": "Draft copy", "project_id": "proj-1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let task: Task = test::read_body_json(resp).await;
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, shared_types::TaskPriority::Medium);
        assert_eq!(task.project_id.as_deref(), Some("proj-1"));
    }

    #[actix_web::test]
    async fn test_create_without_project_is_rejected() {
        let state = state(false);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(routes::configure))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(CreateTaskRequest {
                title: "Write brief".to_string(),
                ..Default::default()
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("project"));

        assert!(state.board().unwrap().tasks().is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_task_is_not_found() {
        let state = state(false);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(routes::configure))
                .await;

        let req = test::TestRequest::delete().uri("/api/tasks/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
