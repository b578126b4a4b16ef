use std::sync::Arc;

use crate::analysis::jd::JdAnalyzer;
use crate::analysis::session::SessionStore;
use crate::animation::AnimationCache;
use crate::catalog::SkillCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable role and resource tables, loaded once at startup.
    pub catalog: Arc<SkillCatalog>,
    /// Per-session analysis outcomes. In-memory only.
    pub sessions: SessionStore,
    /// Generative analysis seam. Production: `LlmJdAnalyzer`; tests swap in
    /// a mock.
    pub jd_analyzer: Arc<dyn JdAnalyzer>,
    /// Fetch-once cache for the decorative dashboard animation.
    pub animation: AnimationCache,
}
