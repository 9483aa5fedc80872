//! Album API routes

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use super::{error_response, PageQuery, ServiceData};
use crate::models::{Album, Track};

/// Album summary without its track listing
#[derive(Debug, Serialize)]
pub struct AlbumResponse {
    pub id: String,
    pub artist: String,
    pub title: String,
    pub count: usize,
}

impl From<&Album> for AlbumResponse {
    fn from(album: &Album) -> Self {
        Self {
            id: album.id.clone(),
            artist: album.artist.clone(),
            title: album.title.clone(),
            count: album.count(),
        }
    }
}

/// Album tracks response
#[derive(Debug, Serialize)]
pub struct AlbumTracksResponse {
    pub album_id: String,
    pub tracks: Vec<Track>,
}

/// List albums, optionally one page at a time
#[get("")]
pub async fn get_albums(service: ServiceData, query: web::Query<PageQuery>) -> impl Responder {
    let page = match query.to_page() {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    match service.list_albums(page.as_ref()) {
        Ok(albums) => {
            let albums: Vec<AlbumResponse> = albums.iter().map(AlbumResponse::from).collect();
            HttpResponse::Ok().json(serde_json::json!({ "albums": albums }))
        }
        Err(e) => error_response(&e),
    }
}

/// List the tracks of one album
#[get("/{album_id}/tracks")]
pub async fn get_album_tracks(
    service: ServiceData,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let album_id = path.into_inner();
    let page = match query.to_page() {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    match service.list_album_tracks(&album_id, page.as_ref()) {
        Ok(tracks) => HttpResponse::Ok().json(AlbumTracksResponse { album_id, tracks }),
        Err(e) => error_response(&e),
    }
}

/// Configure album routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_albums).service(get_album_tracks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::core::service::testing;

    #[actix_web::test]
    async fn test_list_albums() {
        let (service, _) = testing::service(10);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/albums").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["albums"].as_array().unwrap().len(), 3);
        assert_eq!(body["albums"][0]["id"], "01");
        assert_eq!(body["albums"][0]["count"], 6);

        let req = test::TestRequest::get()
            .uri("/albums?cursor=02&size=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["albums"][0]["id"], "03");

        let req = test::TestRequest::get()
            .uri("/albums?cursor=02&size=1&before=true")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["albums"][0]["id"], "01");
    }

    #[actix_web::test]
    async fn test_album_tracks() {
        let (service, _) = testing::service(10);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/albums/02/tracks").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["tracks"].as_array().unwrap().len(), 3);
        assert_eq!(body["tracks"][1]["id"], "02-02");

        let req = test::TestRequest::get().uri("/albums/2/tracks").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/albums/42/tracks").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get()
            .uri("/albums/01/tracks?cursor=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
