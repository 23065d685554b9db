use actix_web::{web, HttpResponse};

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/health", web::get().to(health_check))
        .route("/generate-invoice", web::post().to(handlers::generate_invoice))
        .route("/download/{token}", web::get().to(handlers::download_invoice));
}

async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("Invoice Generator API running")
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}
