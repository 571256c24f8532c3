//! Guild Catalog: the static, read-only list of guilds the matcher scores against.
//!
//! Loaded once at startup (built-in or from a JSON file) and shared via `Arc`.
//! There is no mutation API.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::guild::{Guild, GuildCategory, GuildRequirements};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate guild id '{0}' in catalog")]
    DuplicateId(String),

    #[error("Catalog contains no guilds")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct GuildCatalog {
    guilds: Vec<Guild>,
}

impl GuildCatalog {
    /// Validates and wraps a guild list. Catalog order is preserved; it is the ranking tie-break.
    pub fn new(guilds: Vec<Guild>) -> Result<Self, CatalogError> {
        if guilds.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for guild in &guilds {
            if !seen.insert(guild.id.as_str()) {
                return Err(CatalogError::DuplicateId(guild.id.clone()));
            }
            if guild.tags.is_empty() {
                warn!("Guild '{}' has no tags; it can never score on overlap", guild.id);
            }
        }

        Ok(Self { guilds })
    }

    /// Reads a JSON array of guilds.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let guilds: Vec<Guild> = serde_json::from_str(&raw)?;
        let catalog = Self::new(guilds)?;
        info!(
            "Loaded {} guilds from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The four guilds the service ships with.
    pub fn builtin() -> Self {
        Self {
            guilds: vec![
                Guild {
                    id: "adventurers-guild".to_string(),
                    name: "Adventurers Guild".to_string(),
                    description: "For explorers and quest seekers in virtual worlds".to_string(),
                    category: GuildCategory::Gaming,
                    member_count: 150,
                    requirements: GuildRequirements {
                        min_level: Some(10),
                        ..Default::default()
                    },
                    tags: strings(&["adventure", "exploration", "quests", "RPG"]),
                },
                Guild {
                    id: "developers-alliance".to_string(),
                    name: "Developers Alliance".to_string(),
                    description: "Collaborative space for game developers and programmers"
                        .to_string(),
                    category: GuildCategory::Development,
                    member_count: 89,
                    requirements: GuildRequirements {
                        skills: Some(strings(&["programming"])),
                        experience: Some(1),
                        ..Default::default()
                    },
                    tags: strings(&["coding", "programming", "collaboration", "learning"]),
                },
                Guild {
                    id: "art-collective".to_string(),
                    name: "Art Collective".to_string(),
                    description: "Creative community for digital artists and designers"
                        .to_string(),
                    category: GuildCategory::Art,
                    member_count: 67,
                    requirements: GuildRequirements {
                        skills: Some(strings(&["art", "design"])),
                        ..Default::default()
                    },
                    tags: strings(&["art", "design", "creativity", "visual"]),
                },
                Guild {
                    id: "ai-research-society".to_string(),
                    name: "AI Research Society".to_string(),
                    description: "Advanced AI research and experimentation group".to_string(),
                    category: GuildCategory::Research,
                    member_count: 45,
                    requirements: GuildRequirements {
                        min_level: Some(25),
                        skills: Some(strings(&["AI", "research"])),
                        experience: Some(3),
                    },
                    tags: strings(&["AI", "research", "innovation", "technology"]),
                },
            ],
        }
    }

    pub fn guilds(&self) -> &[Guild] {
        &self.guilds
    }

    pub fn get(&self, id: &str) -> Option<&Guild> {
        self.guilds.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.guilds.len()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
