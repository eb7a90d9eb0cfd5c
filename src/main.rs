//! Wiring & DI. Entry point: load config, pick the structure generator, run the HTTP server.
//! No business logic here; processing is delegated to AssistService.

use dotenv::dotenv;
use focus_assist::adapters::ai::{HeuristicAdapter, OpenAiAdapter};
use focus_assist::ports::StructurePort;
use focus_assist::shared::config::AppConfig;
use focus_assist::usecases::AssistService;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config load failed; using defaults");
            AppConfig::default()
        }
    };

    // --- Structure generator: model-backed when a key is present, heuristic otherwise ---
    let generator: Arc<dyn StructurePort> = if cfg.is_ai_configured() {
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "AI structuring enabled with OpenAI adapter"
        );
        Arc::new(
            OpenAiAdapter::new(
                cfg.ai_api_url_or_default(),
                cfg.ai_api_key().unwrap_or_default(),
                cfg.ai_model_or_default(),
                Duration::from_secs(cfg.ai_timeout_secs_or_default()),
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    } else {
        info!("AI API key not set, using heuristic structure generator");
        Arc::new(HeuristicAdapter::new())
    };

    let service = Arc::new(AssistService::new(generator));

    focus_assist::adapters::http::serve(cfg.listen_addr_or_default(), service).await
}
