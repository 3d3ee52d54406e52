use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health, players, shuffle};
use super::state::AppState;

/// Builds the application router with middleware and shared state
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/api", get(health::api_root))
        .route("/api/health", get(health::store_health))
        // Player routes
        .route(
            "/api/players",
            get(players::list_players).post(players::create_player),
        )
        .route("/api/players/import", post(players::import_players))
        .route(
            "/api/players/:id",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        // Shuffle routes
        .route("/api/shuffle", post(shuffle::shuffle_teams))
        .route("/api/shuffle/custom", post(shuffle::shuffle_custom))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
