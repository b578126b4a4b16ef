pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::animation;
use crate::report::handlers as report;
use crate::state::AppState;

/// Uploaded resumes can exceed axum's 2 MB default body limit.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(analysis::handle_list_roles))
        .route("/api/v1/analyze", post(analysis::handle_analyze_role))
        .route("/api/v1/analyze/jd", post(analysis::handle_analyze_jd))
        .route(
            "/api/v1/sessions/:id/roadmap",
            get(analysis::handle_session_roadmap),
        )
        .route(
            "/api/v1/sessions/:id/report",
            get(report::handle_session_report),
        )
        .route("/api/v1/animation", get(animation::animation_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
