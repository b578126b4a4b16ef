//! Roadmap Assembler — turns missing skills into a week-numbered plan.

use serde::Serialize;

use crate::analysis::matcher::AnalysisResult;
use crate::catalog::SkillCatalog;

/// One week of the learning roadmap. Derived entirely from an
/// `AnalysisResult`; recomputed on every request, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapEntry {
    /// 1-based sequential week index.
    pub week: u32,
    pub skill: String,
    /// Resolved learning resource, or the catalog placeholder on a miss.
    pub resource: String,
}

/// Builds one entry per missing skill, core gaps first, then secondary,
/// both in the role's declaration order. Zero gaps produce zero entries;
/// callers distinguish that from "never analyzed" via the session store.
pub fn build(analysis: &AnalysisResult, catalog: &SkillCatalog) -> Vec<RoadmapEntry> {
    analysis
        .missing()
        .enumerate()
        .map(|(i, skill)| RoadmapEntry {
            week: i as u32 + 1,
            skill: skill.to_string(),
            resource: catalog.resolve(skill).to_string(),
        })
        .collect()
}
