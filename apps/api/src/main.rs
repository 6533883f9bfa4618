mod analysis;
mod config;
mod db;
mod errors;
mod extract;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::LlmAnalyzer;
use crate::analysis::keywords::PhraseDictionary;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgRecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Module targets use the crate name with underscores
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{crate_name}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the record store
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(PgRecordStore::new(pool));

    // Initialize the generation-service client and analyzer
    let llm = LlmClient::new(config.llm_base_url.clone(), config.llm_api_key.clone())?;
    let analyzer = Arc::new(LlmAnalyzer::new(llm));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Phrase dictionary: file-backed when configured, built-in otherwise
    let phrases = match &config.phrase_dictionary_path {
        Some(path) => {
            let dict = PhraseDictionary::from_file(path)?;
            info!("Loaded phrase dictionary from {path}");
            Arc::new(dict)
        }
        None => Arc::new(PhraseDictionary::default()),
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        analyzer,
        store,
        phrases,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
