mod handlers;

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::{DynAPI, API};
use crate::auth::AuthGate;
use crate::config::Config;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{health, places};
use crate::wire::CoordinateFormat;

pub fn router(api: DynAPI, auth: AuthGate, coordinate_format: CoordinateFormat) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route("/places", post(places::create).get(places::list))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(api))
        .layer(Extension(auth))
        .layer(Extension(coordinate_format))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, config: &Config) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;

    let app = router(api, config.auth.clone(), config.coordinate_format);

    tracing::info!(
        auth_enabled = config.auth.is_enabled(),
        coordinate_format = ?config.coordinate_format,
        "listening on {}",
        config.bind_address
    );

    axum::Server::try_bind(&config.bind_address)
        .map_err(|err| unexpected_error(format!("cannot bind {}: {}", config.bind_address, err)))?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| unexpected_error(format!("server error: {}", err)))?;

    tracing::info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("received ctrl-c, shutting down");
}
