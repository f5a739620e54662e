use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    db::DbPool,
    error::ApiError,
    services::{auth::LoginRequest, AuthService, JwtService},
};

#[post("/login")]
pub async fn login(
    pool: web::Data<DbPool>,
    jwt_service: web::Data<JwtService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let service = AuthService::new(pool.get_ref().clone(), jwt_service.get_ref().clone());
    let response = service.login(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
