//! Report Renderer — serializes one analysis outcome into downloadable
//! artifacts.
//!
//! Both encoders (plain text, paginated PDF) are pure functions of the same
//! `ReportInput`; all lookups and business logic happen before this module.

pub mod handlers;
pub mod pdf;
pub mod text;

use chrono::{DateTime, Utc};

use crate::analysis::jd::JdAnalysis;
use crate::analysis::matcher::AnalysisResult;
use crate::catalog::SkillCatalog;

pub const REPORT_TITLE: &str = "SKILLBRIDGE CAREER REPORT";

/// Label used in place of a role name when the analysis targeted a free-text
/// job description.
pub const JD_TARGET_LABEL: &str = "Custom job description";

/// One roadmap line of the report, already fully resolved.
#[derive(Debug, Clone)]
pub struct ReportLine {
    pub label: String,
    pub detail: String,
}

/// Everything the encoders need. Derived once from an analysis outcome,
/// then rendered to any number of encodings with no further computation.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub target: String,
    pub score: u8,
    pub missing: Vec<String>,
    pub roadmap: Vec<ReportLine>,
    pub generated_at: DateTime<Utc>,
}

impl ReportInput {
    pub fn from_analysis(analysis: &AnalysisResult, catalog: &SkillCatalog) -> Self {
        let roadmap = crate::analysis::roadmap::build(analysis, catalog)
            .into_iter()
            .map(|entry| ReportLine {
                label: format!("Week {}", entry.week),
                detail: format!("{} -> {}", entry.skill, entry.resource),
            })
            .collect();

        Self {
            target: analysis.role.clone(),
            score: analysis.score,
            missing: analysis.missing().map(String::from).collect(),
            roadmap,
            generated_at: Utc::now(),
        }
    }

    pub fn from_jd(analysis: &JdAnalysis) -> Self {
        Self {
            target: JD_TARGET_LABEL.to_string(),
            score: analysis.score,
            missing: analysis.missing.clone(),
            roadmap: analysis
                .weeks()
                .map(|(label, plan)| ReportLine {
                    label: label.to_string(),
                    detail: plan.to_string(),
                })
                .collect(),
            generated_at: Utc::now(),
        }
    }
}
