//! Player API routes: what is playing and what plays next

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use super::{error_response, ServiceData};

/// Currently playing track, `null` when idle
#[get("/current")]
pub async fn get_current(service: ServiceData) -> impl Responder {
    match service.current_track() {
        Ok(track) => HttpResponse::Ok().json(json!({ "track": track })),
        Err(e) => error_response(&e),
    }
}

/// Track at the head of the queue, `null` when the queue is empty
#[get("/next")]
pub async fn get_next(service: ServiceData) -> impl Responder {
    match service.next_track() {
        Ok(track) => HttpResponse::Ok().json(json!({ "track": track })),
        Err(e) => error_response(&e),
    }
}

/// Configure player routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_current).service(get_next);
}
