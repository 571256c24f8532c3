// Profile extraction: free text -> UserProfile via keyword and regex heuristics.
// Missing numeric fields are filled by an injected ProfileDefaults provider.

pub mod defaults;
pub mod extractor;
pub mod handlers;

pub use defaults::{FallbackMode, FixedDefaults, ProfileDefaults, RandomDefaults};
pub use extractor::extract_profile;
