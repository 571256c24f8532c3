//! Fallback values for profile fields that could not be read from the message.

use std::str::FromStr;

use rand::Rng;

/// Supplies level / experience when the message does not state them.
///
/// Carried in `AppState` as `Arc<dyn ProfileDefaults>`.
pub trait ProfileDefaults: Send + Sync {
    fn level(&self) -> u32;
    fn experience(&self) -> u32;
}

/// Deterministic sentinel values. Default in tests and in production.
#[derive(Debug, Clone, Copy)]
pub struct FixedDefaults {
    pub level: u32,
    pub experience: u32,
}

impl Default for FixedDefaults {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
        }
    }
}

impl ProfileDefaults for FixedDefaults {
    fn level(&self) -> u32 {
        self.level
    }

    fn experience(&self) -> u32 {
        self.experience
    }
}

/// Draws filler values: level uniform in 1..=30, experience uniform in 0..=9.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDefaults;

impl ProfileDefaults for RandomDefaults {
    fn level(&self) -> u32 {
        rand::thread_rng().gen_range(1..=30)
    }

    fn experience(&self) -> u32 {
        rand::thread_rng().gen_range(0..=9)
    }
}

/// Which provider to build at startup (`PROFILE_FALLBACK`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackMode {
    #[default]
    Fixed,
    Random,
}

impl FallbackMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackMode::Fixed => "fixed",
            FallbackMode::Random => "random",
        }
    }

    pub fn provider(&self) -> Box<dyn ProfileDefaults> {
        match self {
            FallbackMode::Fixed => Box::new(FixedDefaults::default()),
            FallbackMode::Random => Box::new(RandomDefaults),
        }
    }
}

impl FromStr for FallbackMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(FallbackMode::Fixed),
            "random" => Ok(FallbackMode::Random),
            other => Err(format!(
                "unknown profile fallback '{other}' (expected 'fixed' or 'random')"
            )),
        }
    }
}
