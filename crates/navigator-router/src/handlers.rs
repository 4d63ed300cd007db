//! HTTP request handlers for the analysis server.
//!
//! Implements EPUB analysis and health check endpoints using axum.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use navigator_domain::traits::NlpEngine;
use navigator_extractor::{AnalysisReport, Pipeline, PipelineError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Multipart field carrying the archive
pub const UPLOAD_FIELD: &str = "file";

/// Shared application state
pub struct AppState<E: NlpEngine> {
    /// Pipeline shared by every request
    pub pipeline: Arc<Pipeline<E>>,
    /// Wall-clock budget per analysis
    pub analysis_timeout: Duration,
    /// Largest request body accepted, in bytes
    pub max_upload_bytes: usize,
}

impl<E: NlpEngine> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            analysis_timeout: self.analysis_timeout,
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" while the server is answering
    pub status: String,
    /// Name of the NLP engine behind the pipeline
    pub engine: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Pipeline rejected the input or failed
    Pipeline(PipelineError),
    /// Upload could not be read
    Upload(StatusCode, String),
    /// Analysis exceeded its budget
    Timeout(Duration),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Pipeline(e) => (pipeline_status(&e), e.to_string()),
            AppError::Upload(status, msg) => (status, msg),
            AppError::Timeout(budget) => (
                StatusCode::GATEWAY_TIMEOUT,
                format!("Analysis timed out after {} seconds", budget.as_secs_f64()),
            ),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        AppError::Pipeline(e)
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        AppError::Upload(e.status(), e.body_text())
    }
}

/// HTTP status for a pipeline error
pub fn pipeline_status(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::MissingInput => StatusCode::BAD_REQUEST,
        PipelineError::ArchiveTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        PipelineError::InvalidArchive(_) | PipelineError::ContentTooShort { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PipelineError::EngineFailure(_) | PipelineError::Config(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Pull the archive bytes out of the `file` field
async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Vec<u8>, AppError> {
    // A request that is not multipart at all carries no file.
    let Ok(mut multipart) = multipart else {
        return Err(PipelineError::MissingInput.into());
    };

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field.bytes().await?;
            return Ok(bytes.to_vec());
        }
    }
    Err(PipelineError::MissingInput.into())
}

/// POST /api/analyze - Analyze an uploaded EPUB
///
/// The pipeline runs on a blocking worker. When the budget expires the
/// request fails while the worker runs to completion in the background.
async fn analyze<E>(
    State(state): State<AppState<E>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, AppError>
where
    E: NlpEngine + Send + Sync + 'static,
    E::Error: Display,
{
    let bytes = read_upload(multipart).await?;
    info!("Received file upload, {} bytes", bytes.len());

    let pipeline = Arc::clone(&state.pipeline);
    let task = tokio::task::spawn_blocking(move || pipeline.analyze(bytes));

    let outcome = match tokio::time::timeout(state.analysis_timeout, task).await {
        Ok(joined) => joined.map_err(|e| AppError::InternalError(e.to_string()))?,
        Err(_) => {
            warn!("Analysis exceeded {:?}", state.analysis_timeout);
            return Err(AppError::Timeout(state.analysis_timeout));
        }
    };

    match outcome {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            if matches!(e, PipelineError::EngineFailure(_)) {
                error!("Analysis failed: {}", e);
            } else {
                warn!("Analysis rejected: {}", e);
            }
            Err(e.into())
        }
    }
}

/// GET /health - Liveness and engine identity
async fn health_check<E>(State(state): State<AppState<E>>) -> Json<HealthCheckResponse>
where
    E: NlpEngine + Send + Sync + 'static,
    E::Error: Display,
{
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        engine: state.pipeline.engine().name().to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router<E>(state: AppState<E>) -> AxumRouter
where
    E: NlpEngine + Send + Sync + 'static,
    E::Error: Display,
{
    let limit = state.max_upload_bytes;
    AxumRouter::new()
        .route("/api/analyze", post(analyze::<E>))
        .route("/health", get(health_check::<E>))
        .layer(DefaultBodyLimit::max(limit))
        .with_state(state)
}
