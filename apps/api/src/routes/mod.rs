pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog + matching
        .route("/api/v1/guilds", get(matching::handle_list_guilds))
        .route("/api/v1/guilds/recommend", post(matching::handle_recommend))
        .route("/api/v1/guilds/:id", get(matching::handle_get_guild))
        // Profile extraction
        .route(
            "/api/v1/profile/extract",
            post(profile::handle_extract_profile),
        )
        // Chat front end
        .route("/api/message", post(advisor::handle_message))
        .with_state(state)
}
