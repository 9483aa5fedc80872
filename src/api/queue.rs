//! Queue API routes

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use super::{error_response, ServiceData};

/// Enqueue request body
#[derive(Debug, Deserialize)]
pub struct EnqueueRequest {
    pub track_id: String,
}

/// Track ids waiting to be played
#[get("")]
pub async fn list_queue(service: ServiceData) -> impl Responder {
    let tracks = service.queued_tracks();
    HttpResponse::Ok().json(json!({
        "length": tracks.len(),
        "tracks": tracks,
    }))
}

/// Spend a credit and queue a track
#[post("")]
pub async fn enqueue_track(
    service: ServiceData,
    body: web::Json<EnqueueRequest>,
) -> impl Responder {
    match service.enqueue_track(&body.track_id) {
        Ok(()) => HttpResponse::Accepted().json(json!({
            "track_id": body.track_id,
            "balance": service.balance(),
        })),
        Err(e) => error_response(&e),
    }
}

/// Configure queue routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_queue).service(enqueue_track);
}
