use actix_web::web;

pub mod adoptions;
pub mod animals;
pub mod auth;
pub mod donations;
pub mod health;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health::health_check)
            .service(web::scope("/auth").service(auth::login))
            .service(animals::list_animals)
            .service(animals::get_animal)
            .service(animals::create_animal)
            .service(adoptions::request_adoption)
            .service(adoptions::list_adoptions)
            .service(donations::record_donation),
    );
}
