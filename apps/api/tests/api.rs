//! Router-level tests: drive the full axum router with `tower::oneshot`,
//! substituting a mock generative analyzer so no network is touched.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use skillbridge_api::analysis::jd::{JdAnalysis, JdAnalysisRequest, JdAnalyzer};
use skillbridge_api::analysis::session::SessionStore;
use skillbridge_api::catalog::SkillCatalog;
use skillbridge_api::config::Config;
use skillbridge_api::errors::AppError;
use skillbridge_api::routes::build_router;
use skillbridge_api::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Test harness
// ────────────────────────────────────────────────────────────────────────────

/// Mock analyzer: returns a canned analysis, or fails like an unreachable /
/// malformed external service.
struct MockJdAnalyzer {
    fail: bool,
}

#[async_trait]
impl JdAnalyzer for MockJdAnalyzer {
    async fn analyze(&self, request: &JdAnalysisRequest) -> Result<JdAnalysis, AppError> {
        if self.fail {
            return Err(AppError::Llm("mock upstream failure".to_string()));
        }
        assert!(!request.job_description.is_empty());
        Ok(serde_json::from_value(json!({
            "score": 64,
            "matched": ["python"],
            "missing": ["docker"],
            "roadmap": {
                "Week 1": "Master Docker with [Docs](https://docs.docker.com/get-started/)"
            }
        }))
        .unwrap())
    }
}

fn test_config() -> Config {
    Config {
        anthropic_api_key: "test-key".to_string(),
        roles_path: None,
        resources_path: None,
        // Unroutable on purpose: the animation fetch must degrade, not hang.
        animation_url: "http://127.0.0.1:1/animation.json".to_string(),
        port: 0,
        rust_log: "info".to_string(),
    }
}

fn app_with_analyzer(fail: bool) -> Router {
    let state = AppState {
        config: test_config(),
        catalog: Arc::new(SkillCatalog::load(None, None).unwrap()),
        sessions: SessionStore::new(),
        jd_analyzer: Arc::new(MockJdAnalyzer { fail }),
        animation: Default::default(),
    };
    build_router(state)
}

fn app() -> Router {
    app_with_analyzer(false)
}

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

fn multipart_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_roles_endpoint_lists_catalog() {
    let response = app()
        .oneshot(Request::get("/api/v1/roles").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["roles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Backend Developer"));
}

#[tokio::test]
async fn test_analyze_backend_developer_scenario() {
    let request = multipart_request(
        "/api/v1/analyze",
        &[("role", "Backend Developer"), ("manual_skills", "java sql expert")],
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["analysis"]["score"], 50);
    assert_eq!(
        json["analysis"]["missing_core"],
        json!(["spring boot", "rest api"])
    );
    assert_eq!(
        json["analysis"]["missing_secondary"],
        json!(["docker", "aws"])
    );
    assert_eq!(json["fully_qualified"], false);

    // Roadmap: core gaps first, then secondary, weeks from 1.
    let roadmap = json["roadmap"].as_array().unwrap();
    assert_eq!(roadmap[0]["week"], 1);
    assert_eq!(roadmap[0]["skill"], "spring boot");
    assert_eq!(roadmap[3]["skill"], "aws");
}

#[tokio::test]
async fn test_analyze_without_role_is_rejected() {
    let request = multipart_request("/api/v1/analyze", &[("manual_skills", "java")]);
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_analyze_unknown_role_is_404() {
    let request = multipart_request("/api/v1/analyze", &[("role", "Astronaut")]);
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_with_unreadable_resume_degrades_to_score_zero() {
    // A corrupt PDF is recovered as empty text: everything is missing.
    let request = multipart_request(
        "/api/v1/analyze",
        &[("role", "Backend Developer"), ("resume", "not really a pdf")],
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["analysis"]["score"], 0);
    assert_eq!(json["analysis"]["missing_core"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_session_roadmap_roundtrip() {
    let app = app();
    let request = multipart_request(
        "/api/v1/analyze",
        &[("role", "Backend Developer"), ("manual_skills", "java sql expert")],
    );
    let response = app.clone().oneshot(request).await.unwrap();
    let json = body_json(response).await;
    let session_id = json["session_id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/sessions/{session_id}/roadmap"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["kind"], "role");
    assert_eq!(json["score"], 50);
    assert_eq!(json["entries"][0]["week"], 1);
    assert_eq!(json["entries"][0]["skill"], "spring boot");
}

#[tokio::test]
async fn test_unknown_session_roadmap_is_404() {
    let response = app()
        .oneshot(
            Request::get("/api/v1/sessions/00000000-0000-0000-0000-000000000000/roadmap")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_text_report_download() {
    let app = app();
    let request = multipart_request(
        "/api/v1/analyze",
        &[("role", "Backend Developer"), ("manual_skills", "java sql expert")],
    );
    let json = body_json(app.clone().oneshot(request).await.unwrap()).await;
    let session_id = json["session_id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/sessions/{session_id}/report?format=txt"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("Compatibility Score: 50%"));
    assert!(text.contains("- spring boot"));
}

#[tokio::test]
async fn test_pdf_report_download() {
    let app = app();
    let request = multipart_request("/api/v1/analyze", &[("role", "Backend Developer")]);
    let json = body_json(app.clone().oneshot(request).await.unwrap()).await;
    let session_id = json["session_id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/sessions/{session_id}/report?format=pdf"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_report_with_unknown_format_is_rejected() {
    let app = app();
    let request = multipart_request("/api/v1/analyze", &[("role", "Backend Developer")]);
    let json = body_json(app.clone().oneshot(request).await.unwrap()).await;
    let session_id = json["session_id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/sessions/{session_id}/report?format=docx"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_jd_analysis_happy_path_and_roadmap_view() {
    let app = app();
    let request = multipart_request(
        "/api/v1/analyze/jd",
        &[
            ("job_description", "We need Docker and Python"),
            ("manual_skills", "python"),
        ],
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["analysis"]["score"], 64);
    assert_eq!(json["analysis"]["missing"], json!(["docker"]));
    let session_id = json["session_id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/sessions/{session_id}/roadmap"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["kind"], "job_description");
    assert_eq!(json["weeks"][0]["label"], "Week 1");
}

#[tokio::test]
async fn test_jd_analysis_without_job_description_is_rejected() {
    let request = multipart_request("/api/v1/analyze/jd", &[("manual_skills", "python")]);
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_jd_analysis_failure_surfaces_once_and_stores_nothing() {
    let app = app_with_analyzer(true);
    let request = multipart_request(
        "/api/v1/analyze/jd",
        &[("job_description", "We need Docker")],
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "LLM_ERROR");
}

#[tokio::test]
async fn test_animation_fetch_failure_degrades_to_no_content() {
    let response = app()
        .oneshot(
            Request::get("/api/v1/animation")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
