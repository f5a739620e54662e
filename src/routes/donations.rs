use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::{
    db::DbPool, error::ApiError, middleware::Authenticated, services::DonationService,
};

// Wire keys follow the deployed clients: `tipo` is the donation type,
// `valor` the amount.
#[derive(Debug, Deserialize, Validate)]
pub struct DonationRequest {
    #[serde(rename = "tipo")]
    #[validate(length(min = 1, message = "Donation type is required"))]
    pub donation_type: String,
    #[serde(rename = "valor")]
    pub amount: f64,
}

#[post("/donations")]
pub async fn record_donation(
    user: Authenticated,
    pool: web::Data<DbPool>,
    body: web::Json<DonationRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let donor_id = user.0.user_id()?;
    let body = body.into_inner();

    let service = DonationService::new(pool.get_ref().clone());
    let donation = service
        .create(donor_id, body.donation_type, body.amount)
        .await?;

    Ok(HttpResponse::Created().json(donation))
}
