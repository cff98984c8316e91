use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::slugs;
use super::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Slug lifecycle
        .route("/save/{user_type}/{user_id}/{action}", get(slugs::create_slug))
        .route(
            "/save/{user_type}/{user_id}/{action}/{ttl}",
            get(slugs::create_slug_with_ttl),
        )
        .route("/lookup/{slug}", get(slugs::lookup_slug))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
