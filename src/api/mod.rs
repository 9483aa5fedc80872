//! REST API routes for the jukebox
//!
//! Handlers translate requests one-to-one into [`JukeboxService`] calls.

pub mod album;
pub mod credits;
pub mod player;
pub mod queue;
pub mod track;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::core::JukeboxService;
use crate::error::{CatalogError, QueueError, ServiceError};
use crate::models::Page;

/// Page size used when a cursor is given without a size
const DEFAULT_PAGE_SIZE: usize = 20;

pub type ServiceData = web::Data<JukeboxService>;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Album routes
        .service(web::scope("/albums").configure(album::configure))
        // Credit routes
        .service(web::scope("/credits").configure(credits::configure))
        // Player routes
        .service(web::scope("/player").configure(player::configure))
        // Queue routes
        .service(web::scope("/queue").configure(queue::configure))
        // Track routes
        .service(web::scope("/tracks").configure(track::configure));
}

/// Pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub cursor: Option<String>,
    pub size: Option<usize>,
    #[serde(default)]
    pub before: bool,
}

impl PageQuery {
    /// `None` when no paging was asked for
    pub fn to_page(&self) -> Result<Option<Page>, HttpResponse> {
        if self.cursor.is_none() && self.size.is_none() {
            return Ok(None);
        }

        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(HttpResponse::BadRequest().json(json!({
                "error": "page size must be greater than zero"
            })));
        }

        Ok(Some(Page::new(
            self.cursor.clone().unwrap_or_default(),
            size,
            self.before,
        )))
    }
}

/// Map a service error onto an HTTP response
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        ServiceError::Catalog(CatalogError::NotFound(_)) => HttpResponse::NotFound().json(body),
        ServiceError::Catalog(CatalogError::Load(_)) => {
            HttpResponse::InternalServerError().json(body)
        }
        ServiceError::Catalog(_) | ServiceError::InvalidCharge(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::NoCredits => HttpResponse::PaymentRequired().json(body),
        ServiceError::Queue(QueueError::Full(_)) => HttpResponse::ServiceUnavailable().json(body),
        ServiceError::Queue(QueueError::Empty) => HttpResponse::Conflict().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query() {
        assert_eq!(PageQuery::default().to_page().unwrap(), None);

        let query = PageQuery {
            cursor: Some("2".to_string()),
            size: None,
            before: true,
        };
        assert_eq!(
            query.to_page().unwrap(),
            Some(Page::new("2", DEFAULT_PAGE_SIZE, true))
        );

        let query = PageQuery {
            cursor: None,
            size: Some(0),
            before: false,
        };
        assert!(query.to_page().is_err());
    }

    #[test]
    fn test_error_status() {
        use actix_web::http::StatusCode;

        let cases = [
            (
                ServiceError::Catalog(CatalogError::InvalidTrackId("x".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Catalog(CatalogError::NotFound("01-09 track".into())),
                StatusCode::NOT_FOUND,
            ),
            (ServiceError::NoCredits, StatusCode::PAYMENT_REQUIRED),
            (
                ServiceError::Queue(QueueError::Full(1)),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (ServiceError::InvalidCharge(-1.0), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(error_response(&err).status(), status);
        }
    }
}
