pub mod board;
pub mod generate;
pub mod projects;
pub mod tasks;
pub mod team;

use actix_web::{error::InternalError, HttpResponse};
use shared_types::ErrorResponse;
use task_board::BoardError;

/// Map a board error onto an HTTP response with an `ErrorResponse` body
pub fn board_error(error: BoardError) -> actix_web::Error {
    let body = ErrorResponse {
        error: error.to_string(),
    };
    let response = match &error {
        BoardError::Validation(_) => HttpResponse::BadRequest().json(body),
        BoardError::NotFound { .. } => HttpResponse::NotFound().json(body),
        BoardError::Persistence(_) => HttpResponse::InternalServerError().json(body),
    };

    InternalError::from_response(error, response).into()
}

pub fn bad_request(message: impl Into<String>) -> actix_web::Error {
    board_error(BoardError::Validation(message.into()))
}
