//! Guild analysis: the text-ready summary of a profile and its recommendation.

use std::fmt::Write;

use serde::Serialize;

use crate::matching::recommender::Recommendation;
use crate::matching::scoring::ScoreBreakdown;
use crate::models::guild::GuildCategory;
use crate::models::profile::UserProfile;

pub const FOUNDER_LINE: &str = "🌟 You're well-suited to create your own guild! \
    Your leadership experience and high activity level make you an ideal guild founder.";

#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub guild_id: String,
    pub guild_name: String,
    pub description: String,
    pub category: GuildCategory,
    pub member_count: u32,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Owned snapshot handed to a `GuildAdvisor`.
#[derive(Debug, Clone, Serialize)]
pub struct GuildAnalysis {
    pub profile: UserProfile,
    pub create_guild: bool,
    pub matches: Vec<MatchSummary>,
    /// Rendered analysis block, see `render_analysis`.
    pub text: String,
}

impl GuildAnalysis {
    pub fn new(profile: &UserProfile, recommendation: &Recommendation<'_>) -> Self {
        let matches = recommendation
            .matches
            .iter()
            .map(|m| MatchSummary {
                guild_id: m.guild.id.clone(),
                guild_name: m.guild.name.clone(),
                description: m.guild.description.clone(),
                category: m.guild.category,
                member_count: m.guild.member_count,
                score: m.score,
                breakdown: m.breakdown.clone(),
            })
            .collect();

        Self {
            profile: profile.clone(),
            create_guild: recommendation.create_guild,
            matches,
            text: render_analysis(profile, recommendation),
        }
    }

    pub fn recommended_guilds(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.guild_name.clone()).collect()
    }
}

/// Renders the user analysis followed by the founder line and the numbered guild list.
pub fn render_analysis(profile: &UserProfile, recommendation: &Recommendation<'_>) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "User Analysis:");
    let _ = writeln!(out, "- Level: {}", profile.level);
    let _ = writeln!(out, "- Skills: {}", profile.skills.join(", "));
    let _ = writeln!(out, "- Experience: {} years", profile.experience);
    let _ = writeln!(
        out,
        "- Leadership: {}",
        if profile.leadership { "Yes" } else { "No" }
    );
    let _ = writeln!(out, "- Activity Level: {}", profile.activity_level.as_str());

    if recommendation.create_guild {
        let _ = write!(out, "\n{FOUNDER_LINE}\n");
    }

    if !recommendation.matches.is_empty() {
        let _ = write!(out, "\n🏰 Recommended Guilds:\n");
        for (index, m) in recommendation.matches.iter().enumerate() {
            let _ = writeln!(out, "{}. **{}** ({}% match)", index + 1, m.guild.name, m.score);
            let _ = writeln!(out, "   {}", m.guild.description);
            let _ = writeln!(
                out,
                "   Members: {} | Category: {}",
                m.guild.member_count,
                m.guild.category.as_str()
            );
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{recommend, GuildCatalog};
    use crate::models::profile::ActivityLevel;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u".to_string(),
            name: "U".to_string(),
            level: 25,
            skills: vec!["AI".to_string(), "research".to_string()],
            interests: vec![],
            experience: 3,
            leadership: false,
            activity_level: ActivityLevel::Medium,
        }
    }

    #[test]
    fn test_render_lists_profile_and_ranked_guilds() {
        let catalog = GuildCatalog::builtin();
        let p = profile();
        let rec = recommend(&p, &catalog);
        let text = render_analysis(&p, &rec);

        assert!(text.starts_with("User Analysis:"));
        assert!(text.contains("- Level: 25"));
        assert!(text.contains("- Skills: AI, research"));
        assert!(text.contains("- Experience: 3 years"));
        assert!(text.contains("- Leadership: No"));
        assert!(text.contains("- Activity Level: medium"));
        assert!(text.contains("1. **AI Research Society** (40% match)"));
        assert!(text.contains("2. **Adventurers Guild** (20% match)"));
        assert!(text.contains("Members: 45 | Category: research"));
        assert!(!text.contains(FOUNDER_LINE));
    }

    #[test]
    fn test_render_founder_without_matches() {
        let catalog = GuildCatalog::builtin();
        let p = UserProfile {
            level: 5,
            skills: vec![],
            ..profile()
        };
        let mut rec = recommend(&p, &catalog);
        assert!(rec.matches.is_empty());
        rec.create_guild = true;

        let text = render_analysis(&p, &rec);
        assert!(text.contains(FOUNDER_LINE));
        assert!(!text.contains("Recommended Guilds"));
    }

    #[test]
    fn test_analysis_snapshot_carries_names() {
        let catalog = GuildCatalog::builtin();
        let p = profile();
        let rec = recommend(&p, &catalog);
        let analysis = GuildAnalysis::new(&p, &rec);

        assert_eq!(
            analysis.recommended_guilds(),
            vec!["AI Research Society", "Adventurers Guild"]
        );
        assert_eq!(analysis.matches[0].breakdown.tag_overlap, 40);
        assert!(!analysis.create_guild);
    }
}
