//! Generative job-description analysis boundary.
//!
//! The model is an external, unverifiable collaborator: this module owns the
//! narrow request/response interface around it. Only the boundary is tested
//! (request shape, response validation, error path) — never model output
//! content. A malformed response is surfaced as a single failure; no partial
//! result is ever stored.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::llm_client::prompts::{gap_analysis_prompt, GAP_ANALYSIS_SYSTEM};
use crate::llm_client::LlmClient;

/// One analysis request: everything the model sees about the candidate and
/// the job.
#[derive(Debug, Clone)]
pub struct JdAnalysisRequest {
    pub resume_text: String,
    pub manual_skills: String,
    pub job_description: String,
}

/// The pinned response contract of the generative analysis.
/// `roadmap` preserves the model's week order (insertion order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdAnalysis {
    pub score: u8,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub roadmap: Map<String, Value>,
}

impl JdAnalysis {
    /// Week label / plan pairs in roadmap order. Only valid after
    /// [`validate_analysis`] has accepted the payload.
    pub fn weeks(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roadmap
            .iter()
            .filter_map(|(label, plan)| plan.as_str().map(|p| (label.as_str(), p)))
    }
}

/// Checks the parsed response against the contract. Returns a description of
/// the first violation; the caller turns that into one user-facing failure.
pub fn validate_analysis(analysis: &JdAnalysis) -> Result<(), String> {
    if analysis.score > 100 {
        return Err(format!("score {} is out of range 0-100", analysis.score));
    }
    if analysis.roadmap.is_empty() {
        return Err("roadmap is empty".to_string());
    }
    for (label, plan) in &analysis.roadmap {
        if label.trim().is_empty() {
            return Err("roadmap contains an empty week label".to_string());
        }
        match plan.as_str() {
            Some(text) if !text.trim().is_empty() => {}
            _ => return Err(format!("roadmap entry '{label}' is not a non-empty string")),
        }
    }
    Ok(())
}

/// The generative analyzer seam. `AppState` holds an `Arc<dyn JdAnalyzer>`
/// so tests can substitute a mock without touching handlers.
#[async_trait]
pub trait JdAnalyzer: Send + Sync {
    async fn analyze(&self, request: &JdAnalysisRequest) -> Result<JdAnalysis, AppError>;
}

/// Production analyzer backed by the LLM client.
pub struct LlmJdAnalyzer {
    llm: LlmClient,
}

impl LlmJdAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl JdAnalyzer for LlmJdAnalyzer {
    async fn analyze(&self, request: &JdAnalysisRequest) -> Result<JdAnalysis, AppError> {
        let prompt = gap_analysis_prompt(
            &request.resume_text,
            &request.manual_skills,
            &request.job_description,
        );

        let analysis: JdAnalysis = self
            .llm
            .call_json(&prompt, GAP_ANALYSIS_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("generative analysis failed: {e}")))?;

        validate_analysis(&analysis)
            .map_err(|e| AppError::Llm(format!("model returned a malformed analysis: {e}")))?;

        Ok(analysis)
    }
}
