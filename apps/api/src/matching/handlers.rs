//! Axum route handlers for the catalog and recommendation API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::advisor::render_analysis;
use crate::errors::AppError;
use crate::matching::recommender::{recommend, GuildMatch};
use crate::matching::scoring::ScoreBreakdown;
use crate::models::guild::Guild;
use crate::models::message::InboundMessage;
use crate::models::profile::UserProfile;
use crate::profile::extract_profile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RankedGuild {
    pub guild: Guild,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

impl From<GuildMatch<'_>> for RankedGuild {
    fn from(m: GuildMatch<'_>) -> Self {
        Self {
            guild: m.guild.clone(),
            score: m.score,
            breakdown: m.breakdown,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub profile: UserProfile,
    pub create_guild: bool,
    pub matches: Vec<RankedGuild>,
    pub analysis: String,
    pub generated_at: DateTime<Utc>,
}

/// GET /api/v1/guilds
pub async fn handle_list_guilds(State(state): State<AppState>) -> Json<Vec<Guild>> {
    Json(state.catalog.guilds().to_vec())
}

/// GET /api/v1/guilds/:id
pub async fn handle_get_guild(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Guild>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Guild {id} not found")))
}

/// POST /api/v1/guilds/recommend
///
/// Extracts a profile from the message and returns the ranked matches with score breakdowns.
/// Blank or missing text is not an error: the profile falls back to defaults.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(message): Json<InboundMessage>,
) -> Json<RecommendResponse> {
    let profile = extract_profile(&message, state.defaults.as_ref());
    let recommendation = recommend(&profile, &state.catalog);
    let analysis = render_analysis(&profile, &recommendation);

    Json(RecommendResponse {
        create_guild: recommendation.create_guild,
        matches: recommendation.matches.into_iter().map(RankedGuild::from).collect(),
        profile,
        analysis,
        generated_at: Utc::now(),
    })
}
