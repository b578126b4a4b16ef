use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillbridge_api::analysis::jd::LlmJdAnalyzer;
use skillbridge_api::analysis::session::SessionStore;
use skillbridge_api::catalog::SkillCatalog;
use skillbridge_api::config::Config;
use skillbridge_api::llm_client::{self, LlmClient};
use skillbridge_api::routes::build_router;
use skillbridge_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("skillbridge_api={0},api={0}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillBridge API v{}", env!("CARGO_PKG_VERSION"));

    // Load the static role and resource tables
    let catalog = Arc::new(SkillCatalog::load(
        config.roles_path.as_deref(),
        config.resources_path.as_deref(),
    )?);
    info!("Skill catalog loaded ({} roles)", catalog.roles().len());

    // Initialize the generative analyzer
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let jd_analyzer = Arc::new(LlmJdAnalyzer::new(llm));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog,
        sessions: SessionStore::new(),
        jd_analyzer,
        animation: Default::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
