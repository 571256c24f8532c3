//! Chat endpoint consumed by the front end.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advisor::analysis::GuildAnalysis;
use crate::advisor::intent::is_guild_request;
use crate::advisor::prompts::NOT_A_GUILD_REQUEST_REPLY;
use crate::advisor::{respond, AdvisorMetadata};
use crate::errors::AppError;
use crate::matching::recommend;
use crate::models::message::InboundMessage;
use crate::profile::extract_profile;
use crate::state::AppState;

pub const GUILD_RECOMMENDATION_ACTION: &str = "GUILD_RECOMMENDATION";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AdvisorMetadata>,
}

/// POST /api/message
///
/// Guild requests run extract → recommend → advise; anything else gets a short hint.
pub async fn handle_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    if !is_guild_request(&request.message) {
        return Ok(Json(ChatResponse {
            text: NOT_A_GUILD_REQUEST_REPLY.to_string(),
            action: None,
            metadata: None,
        }));
    }

    let inbound = InboundMessage {
        text: request.message,
        user_id: request.user_id,
        user_name: request.user_name,
    };
    let profile = extract_profile(&inbound, state.defaults.as_ref());
    let recommendation = recommend(&profile, &state.catalog);
    info!(
        "Guild request from {}: {} matches, create_guild={}",
        profile.id,
        recommendation.matches.len(),
        recommendation.create_guild
    );

    let analysis = GuildAnalysis::new(&profile, &recommendation);
    let response = respond(state.advisor.as_ref(), &analysis).await;

    Ok(Json(ChatResponse {
        text: response.text,
        action: Some(GUILD_RECOMMENDATION_ACTION),
        metadata: response.metadata,
    }))
}
