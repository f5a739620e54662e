use actix_web::{get, post, web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    db::{models::NewAnimal, DbPool},
    error::ApiError,
    middleware::AdminUser,
    services::{animal::AnimalFilter, AnimalService},
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnimalRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Species is required"))]
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub health_status: Option<String>,
    pub admission_date: Option<NaiveDate>,
}

#[get("/animals")]
pub async fn list_animals(
    pool: web::Data<DbPool>,
    filter: web::Query<AnimalFilter>,
) -> Result<HttpResponse, ApiError> {
    let service = AnimalService::new(pool.get_ref().clone());
    let animals = service.list(filter.into_inner()).await?;

    Ok(HttpResponse::Ok().json(animals))
}

#[get("/animals/{id}")]
pub async fn get_animal(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let service = AnimalService::new(pool.get_ref().clone());
    let animal = service
        .get(path.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Animal not found".to_string()))?;

    Ok(HttpResponse::Ok().json(animal))
}

#[post("/animals")]
pub async fn create_animal(
    _admin: AdminUser,
    pool: web::Data<DbPool>,
    body: web::Json<CreateAnimalRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let body = body.into_inner();

    let service = AnimalService::new(pool.get_ref().clone());
    let animal = service
        .create(NewAnimal {
            name: body.name,
            species: body.species,
            breed: body.breed,
            age: body.age,
            health_status: body.health_status,
            admission_date: body.admission_date,
        })
        .await?;

    Ok(HttpResponse::Created().json(animal))
}
