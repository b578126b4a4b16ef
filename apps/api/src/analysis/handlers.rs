//! Axum route handlers for the analysis API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::jd::{JdAnalysis, JdAnalysisRequest};
use crate::analysis::matcher::{match_role, AnalysisResult};
use crate::analysis::roadmap::{self, RoadmapEntry};
use crate::analysis::session::SessionOutcome;
use crate::catalog::RoleProfile;
use crate::errors::AppError;
use crate::extract;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleProfile>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session_id: Uuid,
    pub analysis: AnalysisResult,
    pub roadmap: Vec<RoadmapEntry>,
    pub fully_qualified: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeJdResponse {
    pub session_id: Uuid,
    pub analysis: JdAnalysis,
}

/// Roadmap view of a stored session outcome. The two analysis variants have
/// different natural shapes, so the view is a tagged union rather than a
/// forced common record.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoadmapView {
    Role {
        role: String,
        score: u8,
        fully_qualified: bool,
        entries: Vec<RoadmapEntry>,
    },
    JobDescription {
        score: u8,
        fully_qualified: bool,
        weeks: Vec<JdWeekView>,
    },
}

#[derive(Debug, Serialize)]
pub struct JdWeekView {
    pub label: String,
    pub plan: String,
}

/// Fields accepted by the multipart analyze endpoints. Unknown parts are
/// ignored.
#[derive(Debug, Default)]
struct UploadFields {
    role: Option<String>,
    job_description: Option<String>,
    manual_skills: String,
    resume: Option<Vec<u8>>,
}

async fn collect_fields(mut multipart: Multipart) -> Result<UploadFields, AppError> {
    let mut fields = UploadFields::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_part)? {
        let name = field.name().map(ToOwned::to_owned);
        match name.as_deref() {
            Some("role") => fields.role = Some(field.text().await.map_err(bad_part)?),
            Some("job_description") => {
                fields.job_description = Some(field.text().await.map_err(bad_part)?)
            }
            Some("manual_skills") => fields.manual_skills = field.text().await.map_err(bad_part)?,
            Some("resume") => fields.resume = Some(field.bytes().await.map_err(bad_part)?.to_vec()),
            _ => {}
        }
    }

    Ok(fields)
}

fn bad_part(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("malformed multipart request: {e}"))
}

impl UploadFields {
    /// Candidate text from whatever profile inputs were provided. An
    /// unreadable or absent resume degrades to the manual skills alone.
    fn candidate_text(&self) -> String {
        let resume_text = match &self.resume {
            Some(bytes) => extract::text_from_pdf(bytes),
            None => String::new(),
        };
        extract::candidate_text(&resume_text, &self.manual_skills)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
///
/// The fixed role enumeration the deterministic analyzer scores against.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.catalog.roles().to_vec(),
    })
}

/// POST /api/v1/analyze
///
/// Deterministic pipeline: extract → match → roadmap. Multipart fields:
/// `role` (required), `resume` (optional PDF), `manual_skills` (optional).
pub async fn handle_analyze_role(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let fields = collect_fields(multipart).await?;

    let role_name = match fields.role.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::Validation(
                "select a target role before analyzing".to_string(),
            ))
        }
    };
    let role = state
        .catalog
        .role(role_name)
        .ok_or_else(|| AppError::NotFound(format!("unknown role '{role_name}'")))?;

    let candidate_text = fields.candidate_text();
    let analysis = match_role(&candidate_text, role)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    let entries = roadmap::build(&analysis, &state.catalog);
    let fully_qualified = analysis.fully_qualified();

    let session_id = Uuid::new_v4();
    state
        .sessions
        .put(session_id, SessionOutcome::Role(analysis.clone()))
        .await;

    tracing::info!(
        role = %analysis.role,
        score = analysis.score,
        gaps = entries.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        session_id,
        analysis,
        roadmap: entries,
        fully_qualified,
    }))
}

/// POST /api/v1/analyze/jd
///
/// Generative pipeline: extract → model call → validate. Multipart fields:
/// `job_description` (required), `resume` and `manual_skills` (optional).
/// Any external failure fails the whole action; nothing is stored.
pub async fn handle_analyze_jd(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeJdResponse>, AppError> {
    let fields = collect_fields(multipart).await?;

    let job_description = match fields.job_description.as_deref().map(str::trim) {
        Some(jd) if !jd.is_empty() => jd.to_string(),
        _ => {
            return Err(AppError::Validation(
                "provide a job description before analyzing".to_string(),
            ))
        }
    };

    let resume_text = match &fields.resume {
        Some(bytes) => extract::text_from_pdf(bytes),
        None => String::new(),
    };

    let request = JdAnalysisRequest {
        resume_text,
        manual_skills: fields.manual_skills.clone(),
        job_description,
    };
    let analysis = state.jd_analyzer.analyze(&request).await?;

    let session_id = Uuid::new_v4();
    state
        .sessions
        .put(session_id, SessionOutcome::Jd(analysis.clone()))
        .await;

    tracing::info!(
        score = analysis.score,
        gaps = analysis.missing.len(),
        "generative analysis complete"
    );

    Ok(Json(AnalyzeJdResponse {
        session_id,
        analysis,
    }))
}

/// GET /api/v1/sessions/:id/roadmap
///
/// Recomputes the roadmap view from the stored outcome. 404 distinguishes
/// "analysis never ran" from a 200 with zero entries ("fully qualified").
pub async fn handle_session_roadmap(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<RoadmapView>, AppError> {
    let outcome = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound("analysis has not been run for this session".to_string()))?;

    let view = match outcome {
        SessionOutcome::Role(analysis) => RoadmapView::Role {
            role: analysis.role.clone(),
            score: analysis.score,
            fully_qualified: analysis.fully_qualified(),
            entries: roadmap::build(&analysis, &state.catalog),
        },
        SessionOutcome::Jd(analysis) => RoadmapView::JobDescription {
            score: analysis.score,
            fully_qualified: analysis.missing.is_empty(),
            weeks: analysis
                .weeks()
                .map(|(label, plan)| JdWeekView {
                    label: label.to_string(),
                    plan: plan.to_string(),
                })
                .collect(),
        },
    };

    Ok(Json(view))
}
