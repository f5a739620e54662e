use actix_web::{get, HttpResponse};
use serde_json::json;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "PawStation API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn reports_status_message_and_timestamp() {
        let app = test::init_service(App::new().service(health_check)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "OK");
        assert!(body["message"].is_string());
        assert!(!body["timestamp"].as_str().unwrap().is_empty());
    }
}
