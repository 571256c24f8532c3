use std::sync::Arc;

use crate::advisor::GuildAdvisor;
use crate::config::Config;
use crate::matching::GuildCatalog;
use crate::profile::ProfileDefaults;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<GuildCatalog>,
    /// Fills level / experience when a message does not state them.
    pub defaults: Arc<dyn ProfileDefaults>,
    /// Template advisor by default, LLM advisor when ANTHROPIC_API_KEY is set.
    pub advisor: Arc<dyn GuildAdvisor>,
    pub config: Config,
}
