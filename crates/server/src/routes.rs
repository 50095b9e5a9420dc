use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::games::GameService;

use crate::observability;
use crate::openapi::ApiDoc;

pub mod games;

#[derive(Clone)]
pub struct ServerState {
    pub games: GameService,
    pub metrics_enabled: bool,
}

impl ServerState {
    pub fn new(games: GameService, metrics_enabled: bool) -> Self {
        Self { games, metrics_enabled }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router: catalog routes, health, API document and,
/// when enabled, the Prometheus endpoint.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let mut app = Router::new()
        .route("/games", get(games::list).post(games::create))
        .route("/games/platform/:platform", get(games::by_platform))
        .route("/games/genre/:genre", get(games::by_genre))
        .route(
            "/games/:id",
            get(games::get).patch(games::update).delete(games::delete),
        )
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    if state.metrics_enabled {
        // route_layer only wraps matched routes, so unknown paths do not create label series
        app = app
            .route_layer(middleware::from_fn(observability::track_metrics))
            .route("/metrics", get(observability::metrics));
    }

    app.with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
