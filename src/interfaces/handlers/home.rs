use actix_web::{HttpResponse, Responder};

pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
