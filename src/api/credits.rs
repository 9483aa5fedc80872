//! Credit API routes

use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

use super::{error_response, ServiceData};
use crate::models::Charge;

/// Current credit balance
#[get("")]
pub async fn get_balance(service: ServiceData) -> impl Responder {
    HttpResponse::Ok().json(json!({ "balance": service.balance() }))
}

/// Deposit money and receive credits
#[post("")]
pub async fn add_balance(service: ServiceData, body: web::Json<Charge>) -> impl Responder {
    match service.add_balance(&body) {
        Ok(added) => HttpResponse::Ok().json(json!({
            "added": added,
            "balance": service.balance(),
        })),
        Err(e) => error_response(&e),
    }
}

/// Configure credit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_balance).service(add_balance);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::core::service::testing;

    #[actix_web::test]
    async fn test_deposit() {
        let (service, _) = testing::service(10);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/credits")
            .set_json(json!({ "amount": 8.0, "currency": "usd" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["added"], 28);

        let req = test::TestRequest::post()
            .uri("/credits")
            .set_json(json!({ "amount": -2, "currency": "usd" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/credits").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["balance"], 28);
    }
}
