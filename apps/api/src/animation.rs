//! Decorative dashboard animation, fetched at most once per process.
//!
//! The payload is static and size-bounded, so the cache has no expiry or
//! eviction. A failed fetch is also cached: the feature degrades to absent
//! for the rest of the process lifetime instead of retrying.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::OnceCell;
use tracing::warn;

use crate::state::AppState;

pub type AnimationCache = Arc<OnceCell<Option<serde_json::Value>>>;

/// GET /api/v1/animation
///
/// 200 with the cached Lottie JSON, or 204 when the one fetch failed.
pub async fn animation_handler(State(state): State<AppState>) -> Response {
    let url = state.config.animation_url.clone();
    let payload = state
        .animation
        .get_or_init(|| async move { fetch_animation(&url).await })
        .await;

    match payload {
        Some(value) => Json(value.clone()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn fetch_animation(url: &str) -> Option<serde_json::Value> {
    let result = async {
        reqwest::get(url)
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await
    }
    .await;

    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("animation fetch failed, feature disabled for this process: {e}");
            None
        }
    }
}
