use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_ID: &str = "unknown";
pub const DEFAULT_USER_NAME: &str = "User";

/// How active the user describes themselves as being.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Medium => "medium",
            ActivityLevel::High => "high",
        }
    }
}

/// Profile inferred from a single message. Recomputed per message, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    /// Always >= 1.
    pub level: u32,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    /// Years.
    pub experience: u32,
    pub leadership: bool,
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// True if `tag` appears among either the skills or the interests.
    pub fn covers_tag(&self, tag: &str) -> bool {
        self.has_skill(tag) || self.interests.iter().any(|i| i == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: DEFAULT_USER_ID.to_string(),
            name: DEFAULT_USER_NAME.to_string(),
            level: 5,
            skills: vec!["coding".to_string()],
            interests: vec!["community".to_string()],
            experience: 2,
            leadership: false,
            activity_level: ActivityLevel::Medium,
        }
    }

    #[test]
    fn test_covers_tag_checks_skills_and_interests() {
        let p = profile();
        assert!(p.covers_tag("coding"));
        assert!(p.covers_tag("community"));
        assert!(!p.covers_tag("art"));
    }

    #[test]
    fn test_tag_match_is_case_sensitive() {
        let p = profile();
        assert!(!p.covers_tag("Coding"));
    }

    #[test]
    fn test_activity_level_serde() {
        assert_eq!(
            serde_json::to_string(&ActivityLevel::High).unwrap(),
            r#""high""#
        );
        assert_eq!(ActivityLevel::default(), ActivityLevel::Low);
    }
}
