//! In-memory session store for analysis outcomes.
//!
//! One entry per completed analysis, keyed by a server-generated session id.
//! The presence of an entry is what distinguishes "analysis ran, zero gaps"
//! from "analysis never ran". Nothing here survives the process; there is no
//! eviction and no cross-session sharing.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::analysis::jd::JdAnalysis;
use crate::analysis::matcher::AnalysisResult;

/// What a completed analysis left behind: either the deterministic
/// role-based result or a generative job-description result.
#[derive(Debug, Clone)]
pub enum SessionOutcome {
    Role(AnalysisResult),
    Jd(JdAnalysis),
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionOutcome>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an outcome, superseding any previous one for the same id.
    pub async fn put(&self, id: Uuid, outcome: SessionOutcome) {
        self.inner.write().await.insert(id, outcome);
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionOutcome> {
        self.inner.read().await.get(&id).cloned()
    }
}
