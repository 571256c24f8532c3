// Guild Matcher: eligibility filter, founder gate, match scoring, ranking.
// Pure functions over an immutable catalog; no I/O outside catalog loading.

pub mod catalog;
pub mod founder;
pub mod handlers;
pub mod recommender;
pub mod requirements;
pub mod scoring;

pub use catalog::GuildCatalog;
pub use founder::should_create_guild;
pub use recommender::{recommend, GuildMatch, Recommendation};
pub use requirements::meets_requirements;
pub use scoring::{calculate_match_score, score_breakdown, ScoreBreakdown};
