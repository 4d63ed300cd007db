//! Character Navigator HTTP Server
//!
//! Exposes the extraction pipeline over HTTP: upload an EPUB to
//! `POST /api/analyze` and receive `{ "characters": [...] }`.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::RouterConfig;
use handlers::{create_router, AppState};
use navigator_extractor::{Pipeline, PipelineError};
use navigator_nlp::RuleEngine;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Pipeline could not be built
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the log subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the analysis HTTP server
///
/// Builds the rule engine once, wraps it in a shared pipeline, and serves
/// until the process is stopped.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    init_tracing();
    config.validate()?;

    info!("Starting Character Navigator server");
    info!("Bind address: {}", config.bind_addr());
    info!("Analysis timeout: {} seconds", config.analysis_timeout_secs);
    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let pipeline = Pipeline::new(RuleEngine::new(), config.pipeline.clone())?;
    info!("NLP engine ready: rule-engine");

    let state = AppState {
        pipeline: Arc::new(pipeline),
        analysis_timeout: config.analysis_timeout(),
        max_upload_bytes: config.max_upload_bytes,
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_converts() {
        let err: RouterError = PipelineError::Config("bad".to_string()).into();
        assert!(err.to_string().contains("bad"));
    }
}
