use diesel::pg::Pg;
use diesel::prelude::*;
use serde::Deserialize;

use crate::{
    db::{
        models::{Animal, NewAnimal},
        schema::animals,
        DbPool,
    },
    error::{ApiError, ApiResult},
};

/// Listing filter over an enumerated set of columns. Absent fields place no
/// constraint on the query.
#[derive(Debug, Default, Deserialize)]
pub struct AnimalFilter {
    pub species: Option<String>,
    pub status: Option<String>,
}

impl AnimalFilter {
    fn apply(self) -> animals::BoxedQuery<'static, Pg> {
        let mut query = animals::table.into_boxed();

        if let Some(species) = self.species {
            query = query.filter(animals::species.eq(species));
        }
        if let Some(status) = self.status {
            query = query.filter(animals::adoption_status.eq(status));
        }

        query.order(animals::id.desc())
    }
}

pub struct AnimalService {
    db_pool: DbPool,
}

impl AnimalService {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    pub async fn list(&self, filter: AnimalFilter) -> ApiResult<Vec<Animal>> {
        let mut conn = self
            .db_pool
            .get()
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        let rows = filter.apply().load::<Animal>(&mut conn)?;

        Ok(rows)
    }

    pub async fn get(&self, animal_id: i32) -> ApiResult<Option<Animal>> {
        let mut conn = self
            .db_pool
            .get()
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        let animal = animals::table
            .filter(animals::id.eq(animal_id))
            .first::<Animal>(&mut conn)
            .optional()?;

        Ok(animal)
    }

    pub async fn create(&self, new_animal: NewAnimal) -> ApiResult<Animal> {
        let mut conn = self
            .db_pool
            .get()
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        let animal = diesel::insert_into(animals::table)
            .values(&new_animal)
            .get_result::<Animal>(&mut conn)?;

        Ok(animal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_for(filter: AnimalFilter) -> String {
        diesel::debug_query::<Pg, _>(&filter.apply()).to_string()
    }

    #[test]
    fn empty_filter_places_no_constraints() {
        let sql = sql_for(AnimalFilter::default());
        assert!(!sql.contains("WHERE"));
        assert!(sql.contains(r#"ORDER BY "animals"."id" DESC"#));
    }

    #[test]
    fn species_filter_binds_a_parameter() {
        let sql = sql_for(AnimalFilter {
            species: Some("dog".to_string()),
            status: None,
        });
        assert!(sql.contains(r#""animals"."species" = $1"#));
        assert!(!sql.contains("adoption_status"));
    }

    #[test]
    fn combined_filter_binds_both_columns() {
        let sql = sql_for(AnimalFilter {
            species: Some("cat".to_string()),
            status: Some("available".to_string()),
        });
        assert!(sql.contains(r#""animals"."species" = $1"#));
        assert!(sql.contains(r#""animals"."adoption_status" = $2"#));
    }
}
