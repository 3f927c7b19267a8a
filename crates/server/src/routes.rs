use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod albums;
pub mod songs;

/// Per-request state: the connection pool, explicitly constructed at startup
/// and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let albums = Router::new()
        .route("/albums", post(albums::create).get(albums::list))
        .route(
            "/albums/:id",
            get(albums::get).put(albums::update).delete(albums::delete),
        );

    let songs = Router::new()
        .route("/songs", post(songs::create).get(songs::list))
        .route(
            "/songs/:id",
            get(songs::get).put(songs::update).delete(songs::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(albums)
        .merge(songs)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
