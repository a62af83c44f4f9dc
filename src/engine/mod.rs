mod helpers;
mod memory;
mod place_api;

pub use memory::MemoryEngine;

use sqlx::Pool;

use crate::{
    api::API,
    db::{init_schema, Database},
    error::Error,
};

/// PostGIS-backed implementation of the API.
#[derive(Debug)]
pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        init_schema(&pool).await?;

        Ok(Self { pool })
    }
}

impl API for Engine {}
