use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::TeamResponse;

use crate::state::AppState;

pub async fn list_team(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let board = state.board()?;
    Ok(HttpResponse::Ok().json(TeamResponse {
        members: board.team().to_vec(),
    }))
}
