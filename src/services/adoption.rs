use diesel::prelude::*;

use crate::{
    db::{
        models::{Adoption, AdoptionWithNames, NewAdoption},
        schema::{adoptions, animals, users},
        DbPool,
    },
    error::{ApiError, ApiResult},
};

pub struct AdoptionService {
    db_pool: DbPool,
}

impl AdoptionService {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    /// The store supplies the pending status and the request timestamp;
    /// referential integrity against animals and users is its job too.
    pub async fn create(
        &self,
        animal_id: i32,
        adopter_id: i32,
        adopter_message: Option<String>,
    ) -> ApiResult<Adoption> {
        let mut conn = self
            .db_pool
            .get()
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        let new_adoption = NewAdoption {
            animal_id,
            adopter_id,
            admin_notes: adopter_message,
        };

        let adoption = diesel::insert_into(adoptions::table)
            .values(&new_adoption)
            .get_result::<Adoption>(&mut conn)?;

        Ok(adoption)
    }

    pub async fn list_with_names(&self) -> ApiResult<Vec<AdoptionWithNames>> {
        let mut conn = self
            .db_pool
            .get()
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        let rows = adoptions::table
            .inner_join(animals::table)
            .inner_join(users::table)
            .select((
                adoptions::id,
                adoptions::animal_id,
                adoptions::adopter_id,
                adoptions::admin_notes,
                adoptions::status,
                adoptions::request_date,
                animals::name,
                users::name,
            ))
            .order(adoptions::request_date.desc())
            .load::<AdoptionWithNames>(&mut conn)?;

        Ok(rows)
    }
}
