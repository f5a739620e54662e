use actix_web::{get, post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    db::DbPool,
    error::ApiError,
    middleware::{AdminUser, Authenticated},
    services::AdoptionService,
};

#[derive(Debug, Deserialize)]
pub struct AdoptionRequest {
    pub animal_id: i32,
    pub adopter_message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdoptionResponse {
    pub id: i32,
    pub animal_id: i32,
    pub adopter_id: i32,
    pub status: String,
    pub request_date: DateTime<Utc>,
    pub message: &'static str,
}

#[post("/adoptions")]
pub async fn request_adoption(
    user: Authenticated,
    pool: web::Data<DbPool>,
    body: web::Json<AdoptionRequest>,
) -> Result<HttpResponse, ApiError> {
    let adopter_id = user.0.user_id()?;
    let body = body.into_inner();

    let service = AdoptionService::new(pool.get_ref().clone());
    let adoption = service
        .create(body.animal_id, adopter_id, body.adopter_message)
        .await?;

    Ok(HttpResponse::Created().json(AdoptionResponse {
        id: adoption.id,
        animal_id: adoption.animal_id,
        adopter_id: adoption.adopter_id,
        status: adoption.status,
        request_date: adoption.request_date,
        message: "Adoption request submitted. Await administrator approval.",
    }))
}

#[get("/adoptions")]
pub async fn list_adoptions(
    _admin: AdminUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let service = AdoptionService::new(pool.get_ref().clone());
    let adoptions = service.list_with_names().await?;

    Ok(HttpResponse::Ok().json(adoptions))
}
