use actix_web::{web, HttpResponse, Responder};

use crate::handlers;

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

/// Register every board route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/api/board", web::get().to(handlers::board::get_board))
        .route("/api/tags", web::get().to(handlers::board::get_vocabulary))
        .route("/api/notifications", web::get().to(handlers::board::drain_notifications))
        .route("/api/tasks", web::get().to(handlers::tasks::list_tasks))
        .route("/api/tasks", web::post().to(handlers::tasks::create_task))
        .route("/api/tasks/generate", web::post().to(handlers::generate::generate_tasks))
        .route("/api/tasks/generate/commit", web::post().to(handlers::generate::commit_generated))
        .route("/api/tasks/{id}", web::put().to(handlers::tasks::update_task))
        .route("/api/tasks/{id}", web::delete().to(handlers::tasks::delete_task))
        .route("/api/tasks/{id}/status", web::patch().to(handlers::tasks::change_status))
        .route("/api/tasks/{id}/priority", web::patch().to(handlers::tasks::change_priority))
        .route("/api/tasks/{id}/complete", web::post().to(handlers::tasks::complete_task))
        .route("/api/tasks/{id}/move", web::post().to(handlers::tasks::move_task))
        .route("/api/projects", web::get().to(handlers::projects::list_projects))
        .route("/api/projects", web::post().to(handlers::projects::create_project))
        .route("/api/projects/{id}/progress", web::patch().to(handlers::projects::update_progress))
        .route("/api/team", web::get().to(handlers::team::list_team));
}
