use anyhow::{Context, Result};

const DEFAULT_LLM_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub llm_api_key: String,
    /// OpenAI-compatible base URL for the generation service.
    pub llm_base_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Deadline for each generation call, enforced by the pipeline.
    pub analysis_timeout_secs: u64,
    /// Optional reconciliation guard: discard the service score when it
    /// diverges from the deterministic score by more than this. Unset
    /// means the service score is always preferred.
    pub score_divergence_limit: Option<u32>,
    /// Optional path to a phrase dictionary file (one phrase per line);
    /// unset uses the built-in dictionary.
    pub phrase_dictionary_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            llm_api_key: require_env("NVIDIA_API_KEY")?,
            llm_base_url: std::env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis_timeout_secs: std::env::var("ANALYSIS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("ANALYSIS_TIMEOUT_SECS must be a positive integer")?,
            score_divergence_limit: match std::env::var("SCORE_DIVERGENCE_LIMIT") {
                Ok(v) => Some(
                    v.parse::<u32>()
                        .context("SCORE_DIVERGENCE_LIMIT must be a non-negative integer")?,
                ),
                Err(_) => None,
            },
            phrase_dictionary_path: std::env::var("PHRASE_DICTIONARY_PATH").ok(),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
