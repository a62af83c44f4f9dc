use places::config::{Config, Storage};
use places::db;
use places::engine::{Engine, MemoryEngine};
use places::error::Error;
use places::server::serve;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .init();

    match &config.storage {
        Storage::Postgres {
            url,
            max_connections,
        } => {
            let pool = db::connect(url, *max_connections).await?;
            let engine = Engine::new(pool).await?;

            serve(engine, &config).await
        }
        Storage::Memory => {
            tracing::warn!("using in-memory storage, places are lost on restart");

            serve(MemoryEngine::new(), &config).await
        }
    }
}
