use serde::{Deserialize, Serialize};

/// Broad grouping a guild belongs to. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuildCategory {
    Gaming,
    Development,
    Art,
    Research,
    Community,
}

impl GuildCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuildCategory::Gaming => "gaming",
            GuildCategory::Development => "development",
            GuildCategory::Art => "art",
            GuildCategory::Research => "research",
            GuildCategory::Community => "community",
        }
    }
}

/// Entry constraints. Every field is optional; a guild with no requirements admits everyone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<u32>,
    /// OR-matched: holding any one of these skills is enough.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// Minimum years of experience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
}

impl GuildRequirements {
    /// Minimum level, with 0 treated as no requirement.
    pub fn level_floor(&self) -> Option<u32> {
        self.min_level.filter(|&l| l > 0)
    }

    /// Minimum years of experience, with 0 treated as no requirement.
    pub fn experience_floor(&self) -> Option<u32> {
        self.experience.filter(|&e| e > 0)
    }
}

/// A static catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: GuildCategory,
    pub member_count: u32,
    #[serde(default)]
    pub requirements: GuildRequirements,
    pub tags: Vec<String>,
}
