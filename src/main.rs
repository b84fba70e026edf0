mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::llm::config::LlmConfig;
use crate::llm::types::LlmError;
use crate::llm::{LlmClient, ToolModel};
use crate::services::suggestions::SuggestConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .map_err(|e| format!("invalid PORT: {e}"))?;

    let llm = match build_llm() {
        Ok(llm) => Some(llm),
        Err(e) => {
            tracing::warn!(error = %e, code = e.error_code(), "llm not configured; rule suggestions disabled");
            None
        }
    };

    let state = state::AppState::new(llm, SuggestConfig::from_env());
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "dataval listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_llm() -> Result<Arc<dyn ToolModel>, LlmError> {
    let config = LlmConfig::from_env()?;
    let client = LlmClient::from_config(&config)?;
    tracing::info!(provider = ?config.provider, model = %config.model, "llm client ready");
    Ok(Arc::new(client))
}
