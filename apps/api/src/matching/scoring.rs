//! Match Scoring: how well a profile fits an (already eligible) guild, 0 to 100.
//!
//! Algorithm:
//! 1. tag overlap: each guild tag found in the profile's skills or interests → 20 points
//! 2. level fit (only when the guild sets a non-zero `min_level`): (level - min_level) × 2, clamped to 0..=20
//! 3. activity bonus: +10 for a highly active profile
//! 4. total = clamp(sum, 0, 100)
//!
//! Tag overlap is not capped on its own, so five overlapping tags already saturate the total.

use serde::Serialize;

use crate::models::guild::Guild;
use crate::models::profile::{ActivityLevel, UserProfile};

pub const POINTS_PER_TAG: u32 = 20;
pub const LEVEL_POINTS_PER_STEP: i64 = 2;
pub const MAX_LEVEL_FIT: i64 = 20;
pub const HIGH_ACTIVITY_BONUS: u32 = 10;
pub const MAX_SCORE: u32 = 100;

/// Per-component view of a match score, returned alongside each match for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub tag_overlap: u32,
    pub level_fit: u32,
    pub activity_bonus: u32,
    /// Guild tags the profile covers, in guild tag order.
    pub matched_tags: Vec<String>,
    /// Clamped sum of the components above.
    pub total: u32,
}

pub fn score_breakdown(profile: &UserProfile, guild: &Guild) -> ScoreBreakdown {
    let matched_tags: Vec<String> = guild
        .tags
        .iter()
        .filter(|tag| profile.covers_tag(tag))
        .cloned()
        .collect();
    let tag_overlap = matched_tags.len() as u32 * POINTS_PER_TAG;

    let level_fit = match guild.requirements.level_floor() {
        Some(min_level) => {
            let level_diff = i64::from(profile.level) - i64::from(min_level);
            (level_diff * LEVEL_POINTS_PER_STEP).clamp(0, MAX_LEVEL_FIT) as u32
        }
        None => 0,
    };

    let activity_bonus = if profile.activity_level == ActivityLevel::High {
        HIGH_ACTIVITY_BONUS
    } else {
        0
    };

    let total = tag_overlap
        .saturating_add(level_fit)
        .saturating_add(activity_bonus)
        .min(MAX_SCORE);

    ScoreBreakdown {
        tag_overlap,
        level_fit,
        activity_bonus,
        matched_tags,
        total,
    }
}

/// Final match score in 0..=100.
pub fn calculate_match_score(profile: &UserProfile, guild: &Guild) -> u32 {
    score_breakdown(profile, guild).total
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
