use actix_cors::Cors;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use pawstation_api::{
    config::AppConfig, db, middleware::RequestLogger, routes, services::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::new().expect("configuration must be valid");
    let db_pool = db::establish_connection(&config.database)
        .expect("database pool must be reachable at startup");
    let jwt_service = JwtService::new(config.jwt.clone());

    tracing::info!(
        host = %config.host,
        port = config.port,
        environment = %config.environment,
        "starting PawStation API"
    );

    let bind_addr = (config.host.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(RequestLogger)
            .app_data(Data::new(db_pool.clone()))
            .app_data(Data::new(jwt_service.clone()))
            .configure(routes::config)
    })
    .bind(bind_addr)?
    .run()
    .await
}
