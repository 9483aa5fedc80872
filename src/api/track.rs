//! Track API routes

use actix_web::{get, web, HttpResponse, Responder};

use super::{error_response, ServiceData};

/// Get a track by id
#[get("/{track_id}")]
pub async fn get_track(service: ServiceData, path: web::Path<String>) -> impl Responder {
    let track_id = path.into_inner();

    match service.get_track(&track_id) {
        Ok(track) => HttpResponse::Ok().json(track),
        Err(e) => error_response(&e),
    }
}

/// Configure track routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_track);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::core::service::testing;
    use crate::models::Track;

    #[actix_web::test]
    async fn test_get_track() {
        let (service, _) = testing::service(10);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/tracks/02-03").to_request();
        let track: Track = test::call_and_read_body_json(&app, req).await;
        assert_eq!(track.title, "The patient");
        assert_eq!(track.media_url, "file://02/03.mp4");

        let req = test::TestRequest::get().uri("/tracks/0203").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/tracks/02-09").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
