//! Advisor: turns a guild analysis into the reply sent back to the user.
//!
//! Default: `TemplateAdvisor` (deterministic, no network).
//! With an API key: `LlmAdvisor` (Anthropic).
//!
//! `AppState` holds an `Arc<dyn GuildAdvisor>`. Whatever the backend, `respond` never
//! fails: any advisor error is replaced by `FALLBACK_REPLY`.

pub mod analysis;
pub mod handlers;
pub mod intent;
pub mod prompts;

use std::fmt::Write;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;

pub use analysis::{render_analysis, GuildAnalysis};
pub use intent::is_guild_request;
use prompts::{ADVISOR_PROMPT_TEMPLATE, ADVISOR_SYSTEM, FALLBACK_REPLY};

/// Structured reply produced by an advisor backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorReply {
    pub recommendation: String,
    pub should_create_guild: bool,
    #[serde(default)]
    pub recommended_guilds: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

/// Metadata attached to a successful reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorMetadata {
    pub should_create_guild: bool,
    pub recommended_guilds: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AdvisorMetadata>,
}

#[async_trait]
pub trait GuildAdvisor: Send + Sync {
    async fn advise(&self, analysis: &GuildAnalysis) -> Result<AdvisorReply, AppError>;

    /// Label for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateAdvisor
// ────────────────────────────────────────────────────────────────────────────

/// Builds the reply straight from the analysis.
pub struct TemplateAdvisor;

#[async_trait]
impl GuildAdvisor for TemplateAdvisor {
    async fn advise(&self, analysis: &GuildAnalysis) -> Result<AdvisorReply, AppError> {
        Ok(compose_template_reply(analysis))
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

fn compose_template_reply(analysis: &GuildAnalysis) -> AdvisorReply {
    let mut recommendation = String::new();
    let mut reasoning = String::new();

    if analysis.create_guild {
        recommendation.push_str(
            "You look ready to found your own guild: you lead, you're very active, \
             and you have the level and experience to back it up.",
        );
        reasoning.push_str("Founder check passed (leadership, 3+ years, level 20+, high activity). ");
    }

    match analysis.matches.as_slice() {
        [] if analysis.create_guild => {}
        [] => recommendation.push_str(
            "None of our guilds fit your profile yet. Tell me more about your skills, \
             level and experience and I'll look again.",
        ),
        [best, rest @ ..] => {
            if !recommendation.is_empty() {
                recommendation.push(' ');
            }
            let _ = write!(
                recommendation,
                "I'd recommend the {} ({}% match).",
                best.guild_name, best.score
            );
            if !rest.is_empty() {
                let others: Vec<&str> = rest.iter().map(|m| m.guild_name.as_str()).collect();
                let _ = write!(recommendation, " You could also look at {}.", others.join(" and "));
            }
        }
    }

    for m in &analysis.matches {
        let tags = if m.breakdown.matched_tags.is_empty() {
            "no shared tags".to_string()
        } else {
            format!("shared tags: {}", m.breakdown.matched_tags.join(", "))
        };
        let _ = write!(
            reasoning,
            "{} scored {} ({tags}; level fit {}; activity bonus {}). ",
            m.guild_name, m.score, m.breakdown.level_fit, m.breakdown.activity_bonus
        );
    }

    AdvisorReply {
        recommendation,
        should_create_guild: analysis.create_guild,
        recommended_guilds: analysis.recommended_guilds(),
        reasoning: reasoning.trim_end().to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAdvisor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAdvisor(pub LlmClient);

#[async_trait]
impl GuildAdvisor for LlmAdvisor {
    async fn advise(&self, analysis: &GuildAnalysis) -> Result<AdvisorReply, AppError> {
        let prompt = ADVISOR_PROMPT_TEMPLATE.replace("{analysis}", &analysis.text);
        let system = format!("{ADVISOR_SYSTEM} {JSON_ONLY_INSTRUCTION}");
        self.0
            .complete_json::<AdvisorReply>(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Advisor reply failed: {e}")))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reply with fallback
// ────────────────────────────────────────────────────────────────────────────

/// Asks the advisor for a reply. Errors never reach the user: they get `FALLBACK_REPLY`.
pub async fn respond(advisor: &dyn GuildAdvisor, analysis: &GuildAnalysis) -> AdvisorResponse {
    match advisor.advise(analysis).await {
        Ok(reply) => AdvisorResponse {
            text: reply.recommendation,
            metadata: Some(AdvisorMetadata {
                should_create_guild: reply.should_create_guild,
                recommended_guilds: reply.recommended_guilds,
                reasoning: reply.reasoning,
            }),
        },
        Err(e) => {
            warn!("Guild advisor ({}) failed: {e}", advisor.backend());
            AdvisorResponse {
                text: FALLBACK_REPLY.to_string(),
                metadata: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{recommend, GuildCatalog};
    use crate::models::profile::{ActivityLevel, UserProfile};

    struct FailingAdvisor;

    #[async_trait]
    impl GuildAdvisor for FailingAdvisor {
        async fn advise(&self, _analysis: &GuildAnalysis) -> Result<AdvisorReply, AppError> {
            Err(AppError::Llm("model unavailable".to_string()))
        }

        fn backend(&self) -> &'static str {
            "failing"
        }
    }

    fn make_profile(level: u32, skills: &[&str], leadership: bool, activity: ActivityLevel) -> UserProfile {
        UserProfile {
            id: "u".to_string(),
            name: "U".to_string(),
            level,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: vec![],
            experience: 5,
            leadership,
            activity_level: activity,
        }
    }

    fn analysis_for(profile: &UserProfile) -> GuildAnalysis {
        let catalog = GuildCatalog::builtin();
        let rec = recommend(profile, &catalog);
        GuildAnalysis::new(profile, &rec)
    }

    #[tokio::test]
    async fn test_failing_advisor_falls_back() {
        let analysis = analysis_for(&make_profile(12, &[], false, ActivityLevel::Low));
        let response = respond(&FailingAdvisor, &analysis).await;

        assert_eq!(response.text, FALLBACK_REPLY);
        assert!(response.metadata.is_none());
    }

    #[tokio::test]
    async fn test_template_advisor_names_best_match() {
        let profile = make_profile(30, &["programming", "coding"], false, ActivityLevel::Medium);
        let analysis = analysis_for(&profile);
        let response = respond(&TemplateAdvisor, &analysis).await;

        // Developers Alliance: 2 tags = 40; Adventurers Guild: level fit 20.
        assert!(response.text.contains("Developers Alliance (40% match)"));
        assert!(response.text.contains("Adventurers Guild"));
        let metadata = response.metadata.unwrap();
        assert!(!metadata.should_create_guild);
        assert_eq!(
            metadata.recommended_guilds,
            vec!["Developers Alliance", "Adventurers Guild"]
        );
        assert!(metadata.reasoning.contains("shared tags: coding, programming"));
    }

    #[tokio::test]
    async fn test_template_advisor_founder() {
        let profile = make_profile(30, &[], true, ActivityLevel::High);
        let reply = TemplateAdvisor.advise(&analysis_for(&profile)).await.unwrap();

        assert!(reply.should_create_guild);
        assert!(reply.recommendation.contains("found your own guild"));
        assert!(reply.reasoning.starts_with("Founder check passed"));
    }

    #[tokio::test]
    async fn test_template_advisor_no_matches() {
        let profile = make_profile(3, &[], false, ActivityLevel::Low);
        let reply = TemplateAdvisor.advise(&analysis_for(&profile)).await.unwrap();

        assert!(reply.recommended_guilds.is_empty());
        assert!(reply.recommendation.contains("None of our guilds fit"));
    }

    #[test]
    fn test_advisor_reply_deserializes_with_defaults() {
        let json = r#"{"recommendation": "Join the Art Collective", "should_create_guild": false}"#;
        let reply: AdvisorReply = serde_json::from_str(json).unwrap();
        assert!(reply.recommended_guilds.is_empty());
        assert!(reply.reasoning.is_empty());
    }

    #[test]
    fn test_prompt_template_has_analysis_slot() {
        assert!(ADVISOR_PROMPT_TEMPLATE.contains("{analysis}"));
    }
}
