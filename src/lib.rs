pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod upload;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub upload_dir: PathBuf,
}

async fn probe() -> Json<Value> {
    Json(json!({ "message": "ok" }))
}

/// Build the full Axum application router.
///
/// Caller is responsible for running database migrations on `pool`
/// beforehand. Uploaded images are written to `upload_dir` and served
/// read-only under `/uploads`.
pub fn build_app(pool: SqlitePool, upload_dir: PathBuf) -> Router {
    let state = AppState {
        db: pool,
        upload_dir: upload_dir.clone(),
    };

    Router::new()
        .route("/test", get(probe))
        .merge(routes::users::router())
        .merge(routes::blogs::router())
        .merge(routes::tags::router())
        .merge(routes::categories::router())
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
