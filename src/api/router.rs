use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Operational routes
    let ops = Router::new()
        .route("/health", get(handlers::ops::health_check))
        .route("/metrics", get(handlers::ops::metrics));

    // JSON API
    let api = Router::new()
        .route("/api/fixtures", get(handlers::fixtures::list))
        .route("/api/recommendations", get(handlers::recommendations::list))
        .route("/api/accumulator", get(handlers::accumulator::legs));

    // Browser-facing color-coded table
    let pages = Router::new().route("/recommendations", get(handlers::recommendations::table));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    ops.merge(api)
        .merge(pages)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
