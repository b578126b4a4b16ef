//! Download endpoint for the analysis report.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::session::SessionOutcome;
use crate::errors::AppError;
use crate::report::{pdf, text, ReportInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// `txt` (default) or `pdf`.
    pub format: Option<String>,
}

/// GET /api/v1/sessions/:id/report?format=txt|pdf
///
/// Serializes the stored outcome into a downloadable artifact. Both formats
/// derive from the same `ReportInput` with no extra computation.
pub async fn handle_session_report(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let outcome = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound("analysis has not been run for this session".to_string()))?;

    let input = match &outcome {
        SessionOutcome::Role(analysis) => ReportInput::from_analysis(analysis, &state.catalog),
        SessionOutcome::Jd(analysis) => ReportInput::from_jd(analysis),
    };

    match query.format.as_deref().unwrap_or("txt") {
        "txt" => Ok(download(
            text::render(&input).into_bytes(),
            "text/plain; charset=utf-8",
            "skillbridge_report.txt",
        )),
        "pdf" => Ok(download(
            pdf::render(&input)?,
            "application/pdf",
            "skillbridge_report.pdf",
        )),
        other => Err(AppError::Validation(format!(
            "unknown report format '{other}' (expected 'txt' or 'pdf')"
        ))),
    }
}

fn download(body: Vec<u8>, content_type: &'static str, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
