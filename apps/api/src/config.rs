use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Optional override for the embedded role table asset.
    pub roles_path: Option<String>,
    /// Optional override for the embedded resource table asset.
    pub resources_path: Option<String>,
    /// URL of the decorative dashboard animation, fetched at most once
    /// per process lifetime.
    pub animation_url: String,
    pub port: u16,
    pub rust_log: String,
}

const DEFAULT_ANIMATION_URL: &str = "https://assets5.lottiefiles.com/packages/lf20_x62chJ.json";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            roles_path: std::env::var("ROLES_PATH").ok(),
            resources_path: std::env::var("RESOURCES_PATH").ok(),
            animation_url: std::env::var("ANIMATION_URL")
                .unwrap_or_else(|_| DEFAULT_ANIMATION_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
