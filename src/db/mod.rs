use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::RunQueryDsl;
use std::time::Duration;

use crate::config::DatabaseConfig;

pub mod models;
pub mod schema;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

pub fn establish_connection(
    config: &DatabaseConfig,
) -> Result<DbPool, Box<dyn std::error::Error + Send + Sync>> {
    let manager = ConnectionManager::<PgConnection>::new(config.url());

    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionCustomizer))
        .max_size(config.max_connections)
        .connection_timeout(Duration::from_secs(config.connect_timeout))
        .build(manager)?;

    // Fail at startup rather than on the first request.
    pool.get()?;

    Ok(pool)
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl diesel::r2d2::CustomizeConnection<PgConnection, diesel::r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        diesel::sql_query("SET timezone = 'UTC'")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        diesel::sql_query("SET application_name = 'pawstation_api'")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        Ok(())
    }
}
