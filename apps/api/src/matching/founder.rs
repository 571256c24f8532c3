use crate::models::profile::{ActivityLevel, UserProfile};

pub const FOUNDER_MIN_EXPERIENCE: u32 = 3;
pub const FOUNDER_MIN_LEVEL: u32 = 20;

/// Hard AND gate: leadership, >= 3 years, level >= 20 and high activity. No partial credit.
pub fn should_create_guild(profile: &UserProfile) -> bool {
    profile.leadership
        && profile.experience >= FOUNDER_MIN_EXPERIENCE
        && profile.level >= FOUNDER_MIN_LEVEL
        && profile.activity_level == ActivityLevel::High
}
