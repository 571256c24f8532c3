//! Recommendation pipeline: founder gate → eligibility filter → score → stable rank → top 3.

use serde::Serialize;

use crate::matching::catalog::GuildCatalog;
use crate::matching::founder::should_create_guild;
use crate::matching::requirements::meets_requirements;
use crate::matching::scoring::{calculate_match_score, score_breakdown, ScoreBreakdown};
use crate::models::guild::Guild;
use crate::models::profile::UserProfile;

pub const MAX_MATCHES: usize = 3;

/// A recommended guild paired with its computed score.
#[derive(Debug, Clone, Serialize)]
pub struct GuildMatch<'a> {
    pub guild: &'a Guild,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub create_guild: bool,
    /// Descending by score; equal scores keep catalog order. At most `MAX_MATCHES`.
    pub matches: Vec<GuildMatch<'a>>,
}

pub fn recommend<'a>(profile: &UserProfile, catalog: &'a GuildCatalog) -> Recommendation<'a> {
    let create_guild = should_create_guild(profile);

    let mut ranked: Vec<(&'a Guild, u32)> = catalog
        .guilds()
        .iter()
        .filter(|guild| meets_requirements(profile, guild))
        .map(|guild| (guild, calculate_match_score(profile, guild)))
        .collect();

    // sort_by is stable: ties stay in catalog order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_MATCHES);

    let matches = ranked
        .into_iter()
        .map(|(guild, score)| GuildMatch {
            guild,
            score,
            breakdown: score_breakdown(profile, guild),
        })
        .collect();

    Recommendation {
        create_guild,
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::guild::{GuildCategory, GuildRequirements};
    use crate::models::profile::ActivityLevel;

    fn make_profile(level: u32, experience: u32, skills: &[&str], interests: &[&str]) -> UserProfile {
        UserProfile {
            id: "u".to_string(),
            name: "U".to_string(),
            level,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            experience,
            leadership: false,
            activity_level: ActivityLevel::Medium,
        }
    }

    fn open_guild(id: &str, tags: &[&str]) -> Guild {
        Guild {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            category: GuildCategory::Community,
            member_count: 10,
            requirements: GuildRequirements::default(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_profile_against_builtin() {
        let catalog = GuildCatalog::builtin();
        let result = recommend(&make_profile(1, 0, &[], &[]), &catalog);

        assert!(!result.create_guild);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_ai_researcher_matches_society_only() {
        let catalog = GuildCatalog::builtin();
        let profile = make_profile(25, 3, &["AI", "research"], &[]);
        let result = recommend(&profile, &catalog);

        // Adventurers Guild also passes (min_level 10) with level fit 20.
        let ids: Vec<&str> = result.matches.iter().map(|m| m.guild.id.as_str()).collect();
        assert_eq!(ids, vec!["ai-research-society", "adventurers-guild"]);
        assert_eq!(result.matches[0].score, 40);
        assert_eq!(result.matches[1].score, 20);
    }

    #[test]
    fn test_founder_signal_is_independent_of_matches() {
        let catalog = GuildCatalog::builtin();
        let profile = UserProfile {
            leadership: true,
            activity_level: ActivityLevel::High,
            ..make_profile(30, 5, &[], &[])
        };
        let result = recommend(&profile, &catalog);
        assert!(result.create_guild);
        assert_eq!(result.matches.len(), 1);
    }

    #[test]
    fn test_score_agrees_with_breakdown_total() {
        let catalog = GuildCatalog::builtin();
        let profile = make_profile(40, 10, &["programming", "art", "AI", "research"], &["AI"]);
        let result = recommend(&profile, &catalog);

        assert!(!result.matches.is_empty());
        for m in &result.matches {
            assert_eq!(m.score, m.breakdown.total);
        }
    }

    #[test]
    fn test_truncates_to_three() {
        let guilds = (0..6)
            .map(|i| open_guild(&format!("g{i}"), &["community"]))
            .collect();
        let catalog = GuildCatalog::new(guilds).unwrap();
        let result = recommend(&make_profile(1, 0, &[], &[]), &catalog);
        assert_eq!(result.matches.len(), MAX_MATCHES);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let guilds = vec![
            open_guild("first", &["x"]),
            open_guild("second", &["art"]),
            open_guild("third", &["y"]),
            open_guild("fourth", &["z"]),
        ];
        let catalog = GuildCatalog::new(guilds).unwrap();
        let result = recommend(&make_profile(1, 0, &["art"], &[]), &catalog);

        let ids: Vec<&str> = result.matches.iter().map(|m| m.guild.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first", "third"]);
    }

    #[test]
    fn test_matches_sorted_descending_and_eligible() {
        let catalog = GuildCatalog::builtin();
        let profile = make_profile(40, 10, &["programming", "coding", "art", "design", "AI"], &["art"]);
        let result = recommend(&profile, &catalog);

        assert!(result.matches.len() <= MAX_MATCHES);
        for pair in result.matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for m in &result.matches {
            assert!(meets_requirements(&profile, m.guild));
        }
    }

    #[test]
    fn test_level_12_only_reaches_adventurers() {
        let catalog = GuildCatalog::builtin();
        let result = recommend(&make_profile(12, 0, &[], &[]), &catalog);
        let ids: Vec<&str> = result.matches.iter().map(|m| m.guild.id.as_str()).collect();
        assert_eq!(ids, vec!["adventurers-guild"]);
        assert_eq!(result.matches[0].score, 4);
    }
}
