//! Integration tests for the analysis server

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use navigator_domain::traits::NlpEngine;
use navigator_domain::{Entity, PosTag, Span, Token};
use navigator_extractor::{AnalysisReport, Pipeline, PipelineConfig};
use navigator_nlp::{MockEngine, NlpError};
use navigator_router::handlers::{create_router, AppState, ErrorResponse, HealthCheckResponse};
use std::io::{Cursor, Write};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt; // for oneshot
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const BOUNDARY: &str = "navigator-test-boundary";

const CONTAINER: &str = r#"<container><rootfiles><rootfile full-path="OEBPS/content.opf"/></rootfiles></container>"#;

const CHAPTER: &str = "<html><body><p>She called her mother every day. \
Her mother was kind and patient. The rain fell softly on the roof all through \
that night.</p></body></html>";

fn epub(chapter: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer.start_file("META-INF/container.xml", options).unwrap();
    writer.write_all(CONTAINER.as_bytes()).unwrap();
    writer.start_file("OEBPS/chapter1.xhtml", options).unwrap();
    writer.write_all(chapter.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn upload(field: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"book.epub\"\r\nContent-Type: application/epub+zip\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn app_with<E>(engine: E, timeout: Duration) -> Router
where
    E: NlpEngine + Send + Sync + 'static,
    E::Error: std::fmt::Display,
{
    let pipeline = Pipeline::new(engine, PipelineConfig::default()).unwrap();
    create_router(AppState {
        pipeline: Arc::new(pipeline),
        analysis_timeout: timeout,
        max_upload_bytes: 1024 * 1024,
    })
}

fn app() -> Router {
    app_with(
        MockEngine::new().with_adjectives(["kind", "patient"]),
        Duration::from_secs(10),
    )
}

async fn error_of(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    error.error
}

/// Engine that stalls long enough to blow a short budget
struct SlowEngine(MockEngine);

impl NlpEngine for SlowEngine {
    type Error = NlpError;

    fn name(&self) -> &str {
        "slow"
    }

    fn segment_sentences(&self, text: &str) -> Result<Vec<Span>, Self::Error> {
        self.0.segment_sentences(text)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        self.0.tokenize(text)
    }

    fn pos_tag(&self, token: &Token) -> PosTag {
        self.0.pos_tag(token)
    }

    fn recognize_entities(&self, text: &str) -> Result<Vec<Entity>, Self::Error> {
        std::thread::sleep(Duration::from_millis(500));
        self.0.recognize_entities(text)
    }
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: HealthCheckResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.engine, "mock");
}

#[tokio::test]
async fn test_analyze_returns_characters() {
    let response = app().oneshot(upload("file", &epub(CHAPTER))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let report: AnalysisReport = serde_json::from_slice(&body).unwrap();

    assert_eq!(report.characters.len(), 1);
    assert_eq!(report.characters[0].name, "The Mother");
    assert_eq!(report.characters[0].traits, vec!["kind", "patient"]);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_file_field() {
    let response = app()
        .oneshot(upload("attachment", &epub(CHAPTER)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_of(response).await, "No file found in request");
}

#[tokio::test]
async fn test_empty_file_is_missing_input() {
    let response = app().oneshot(upload("file", b"")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_not_an_epub() {
    let response = app()
        .oneshot(upload("file", b"This is not an EPUB"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error_of(response).await.starts_with("Invalid EPUB"));
}

#[tokio::test]
async fn test_empty_book() {
    let response = app()
        .oneshot(upload("file", &epub("<p>Empty.</p>")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error_of(response).await.contains("DRM"));
}

#[tokio::test]
async fn test_engine_failure_is_server_error() {
    let app = app_with(
        MockEngine::new().failing("model not loaded"),
        Duration::from_secs(10),
    );
    let response = app.oneshot(upload("file", &epub(CHAPTER))).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_of(response).await.contains("model not loaded"));
}

#[tokio::test]
async fn test_analysis_timeout() {
    let app = app_with(SlowEngine(MockEngine::new()), Duration::from_millis(50));
    let response = app.oneshot(upload("file", &epub(CHAPTER))).await.unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert!(error_of(response).await.contains("timed out"));
}

#[tokio::test]
async fn test_upload_over_body_limit() {
    let pipeline = Pipeline::new(MockEngine::new(), PipelineConfig::default()).unwrap();
    let app = create_router(AppState {
        pipeline: Arc::new(pipeline),
        analysis_timeout: Duration::from_secs(10),
        max_upload_bytes: 64,
    });

    let response = app.oneshot(upload("file", &[b'x'; 4096])).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
