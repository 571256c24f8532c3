//! Profile Extractor: turns a raw chat message into a `UserProfile`.
//!
//! Heuristics only: fixed keyword vocabularies and two regexes. Never fails;
//! anything the text does not state comes from the injected `ProfileDefaults`.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::models::message::InboundMessage;
use crate::models::profile::{ActivityLevel, UserProfile, DEFAULT_USER_ID, DEFAULT_USER_NAME};
use crate::profile::defaults::ProfileDefaults;

pub const SKILL_VOCABULARY: &[&str] = &[
    "programming",
    "coding",
    "art",
    "design",
    "research",
    "AI",
    "gaming",
];

pub const INTEREST_VOCABULARY: &[&str] = &[
    "games",
    "development",
    "art",
    "AI",
    "research",
    "community",
];

static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)level\s*(\d+)").expect("level pattern is valid")
});

static EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*years?\s*(experience|exp)").expect("experience pattern is valid")
});

/// Builds a profile from the message text and sender fields.
pub fn extract_profile(message: &InboundMessage, defaults: &dyn ProfileDefaults) -> UserProfile {
    let content = message.text.to_lowercase();

    UserProfile {
        id: message
            .user_id
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        name: message
            .user_name
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
        level: extract_level(&content).unwrap_or_else(|| defaults.level()),
        skills: match_vocabulary(&content, SKILL_VOCABULARY),
        interests: match_vocabulary(&content, INTEREST_VOCABULARY),
        experience: extract_experience(&content).unwrap_or_else(|| defaults.experience()),
        leadership: content.contains("lead") || content.contains("manage"),
        activity_level: extract_activity(&content),
    }
}

/// First "level N" in the text. Level 0 is lifted to 1; digits that overflow are ignored.
fn extract_level(content: &str) -> Option<u32> {
    LEVEL_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(|level| level.max(1))
}

fn extract_experience(content: &str) -> Option<u32> {
    EXPERIENCE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Vocabulary entries whose lowercase form occurs in `content`, in vocabulary order.
fn match_vocabulary(content: &str, vocabulary: &[&str]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for word in vocabulary {
        if content.contains(&word.to_lowercase()) && !found.iter().any(|f| f == word) {
            found.push(word.to_string());
        }
    }
    found
}

fn extract_activity(content: &str) -> ActivityLevel {
    if content.contains("very active") {
        ActivityLevel::High
    } else if content.contains("sometimes") {
        ActivityLevel::Medium
    } else {
        ActivityLevel::Low
    }
}
