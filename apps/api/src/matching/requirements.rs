use crate::models::guild::Guild;
use crate::models::profile::UserProfile;

/// Eligibility filter. AND of every requirement the guild sets; unset (or zero) requirements pass.
/// Skills are OR-matched: one overlapping skill is enough.
pub fn meets_requirements(profile: &UserProfile, guild: &Guild) -> bool {
    let req = &guild.requirements;

    if let Some(min_level) = req.level_floor() {
        if profile.level < min_level {
            return false;
        }
    }

    if let Some(min_experience) = req.experience_floor() {
        if profile.experience < min_experience {
            return false;
        }
    }

    if let Some(skills) = req.skills.as_deref() {
        if !skills.is_empty() && !skills.iter().any(|s| profile.has_skill(s)) {
            return false;
        }
    }

    true
}
