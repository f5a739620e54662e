use diesel::prelude::*;

use crate::{
    db::{
        models::{Donation, NewDonation},
        schema::donations,
        DbPool,
    },
    error::{ApiError, ApiResult},
};

pub struct DonationService {
    db_pool: DbPool,
}

impl DonationService {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    pub async fn create(
        &self,
        donor_id: i32,
        donation_type: String,
        amount: f64,
    ) -> ApiResult<Donation> {
        let mut conn = self
            .db_pool
            .get()
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        let new_donation = NewDonation {
            donor_id,
            donation_type,
            amount,
        };

        let donation = diesel::insert_into(donations::table)
            .values(&new_donation)
            .get_result::<Donation>(&mut conn)?;

        Ok(donation)
    }
}
