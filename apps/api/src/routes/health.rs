use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, catalog size and the active backends.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "guildmatch",
        "guilds": state.catalog.len(),
        "advisor": state.advisor.backend(),
        "profile_fallback": state.config.profile_fallback.as_str()
    }))
}
