use anyhow::{anyhow, Context, Result};

use crate::profile::FallbackMode;

/// Application configuration loaded from environment variables.
/// Nothing is required: every variable has a default or is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables the LLM advisor when set; otherwise replies come from the template advisor.
    pub anthropic_api_key: Option<String>,
    /// JSON catalog to load instead of the built-in guilds.
    pub guild_catalog_path: Option<String>,
    pub profile_fallback: FallbackMode,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            guild_catalog_path: None,
            profile_fallback: FallbackMode::Fixed,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match optional(&lookup, "PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let profile_fallback = match optional(&lookup, "PROFILE_FALLBACK") {
            Some(raw) => raw
                .parse::<FallbackMode>()
                .map_err(|e| anyhow!(e))
                .context("PROFILE_FALLBACK is invalid")?,
            None => defaults.profile_fallback,
        };

        Ok(Config {
            anthropic_api_key: optional(&lookup, "ANTHROPIC_API_KEY"),
            guild_catalog_path: optional(&lookup, "GUILD_CATALOG_PATH"),
            profile_fallback,
            port,
            rust_log: optional(&lookup, "RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}
