use sqlx::{postgres::PgPoolOptions, Executor, Pool, Postgres};

use crate::error::Error;

pub type Database = Postgres;

// `place` collides with a table shipped in the postgis/postgis image.
pub const PLACE_TABLE: &str = "app_place";

#[tracing::instrument(skip(db_uri))]
pub async fn connect(db_uri: &str, max_connections: u32) -> Result<Pool<Database>, Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(db_uri)
        .await?;

    tracing::info!("connected to database");

    Ok(pool)
}

/// Makes sure the PostGIS extension and the places table exist. Existing data
/// is left untouched.
pub async fn init_schema(pool: &Pool<Database>) -> Result<(), Error> {
    pool.execute("CREATE EXTENSION IF NOT EXISTS postgis")
        .await?;

    pool.execute(
        format!(
            "CREATE TABLE IF NOT EXISTS {} (id SERIAL PRIMARY KEY, name VARCHAR NOT NULL, description VARCHAR NOT NULL, location geography(POINT, 4326) NOT NULL)",
            PLACE_TABLE
        )
        .as_str(),
    )
    .await?;

    tracing::info!("database schema ready");

    Ok(())
}
