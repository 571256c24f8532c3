use axum::{extract::State, Json};

use crate::models::message::InboundMessage;
use crate::models::profile::UserProfile;
use crate::profile::extract_profile;
use crate::state::AppState;

/// POST /api/v1/profile/extract
///
/// Missing or blank text yields a profile built entirely from defaults.
pub async fn handle_extract_profile(
    State(state): State<AppState>,
    Json(message): Json<InboundMessage>,
) -> Json<UserProfile> {
    Json(extract_profile(&message, state.defaults.as_ref()))
}
