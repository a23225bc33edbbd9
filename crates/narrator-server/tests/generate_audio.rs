//! End-to-end tests for the audio generation endpoint, driven against the
//! router with a stubbed speech provider.

use std::io::Cursor;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use bytes::Bytes;
use narrator_core::{
    AppConfig, Error, SpeechChunk, SpeechProvider, SpeechRequest, SpeechStream,
};
use narrator_server::{api, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Provider stub that replays a fixed chunk sequence
struct StubProvider {
    chunks: Vec<SpeechChunk>,
}

#[async_trait::async_trait]
impl SpeechProvider for StubProvider {
    async fn synthesize(&self, _request: &SpeechRequest) -> narrator_core::Result<SpeechStream> {
        let chunks = self.chunks.clone();
        Ok(Box::pin(futures::stream::iter(chunks.into_iter().map(Ok))))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Provider stub whose synthesis call fails outright
struct FailingProvider;

#[async_trait::async_trait]
impl SpeechProvider for FailingProvider {
    async fn synthesize(&self, _request: &SpeechRequest) -> narrator_core::Result<SpeechStream> {
        Err(Error::UpstreamError("503: model overloaded".to_string()))
    }

    fn name(&self) -> &str {
        "failing-stub"
    }
}

fn app_with_chunks(chunks: Vec<SpeechChunk>) -> Router {
    let state = AppState::with_provider(AppConfig::default(), Arc::new(StubProvider { chunks }));
    api::create_router(state)
}

fn chunk(len: usize, mime_type: Option<&str>) -> SpeechChunk {
    SpeechChunk {
        data: Bytes::from(vec![0u8; len]),
        mime_type: mime_type.map(str::to_string),
    }
}

fn post_generate(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-audio")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

async fn error_message(response: axum::response::Response) -> String {
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    body["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn home_and_health_are_live() {
    let app = app_with_chunks(vec![]);

    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&body_bytes(response).await[..], b"healthy");
}

#[tokio::test]
async fn generates_wav_from_streamed_chunks() {
    let app = app_with_chunks(vec![
        chunk(100, Some("audio/L16;rate=24000")),
        chunk(50, None),
    ]);

    let response = app
        .oneshot(post_generate(json!({"text": "hello", "voice": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "audio/wav"
    );
    assert_eq!(
        response.headers()["x-model-used"].to_str().unwrap(),
        "gemini-2.5-pro-preview-tts"
    );

    let body = body_bytes(response).await;
    assert_eq!(body.len(), 44 + 150);
    assert_eq!(&body[0..4], b"RIFF");

    let mut reader = hound::WavReader::new(Cursor::new(body.to_vec())).expect("valid WAV");
    assert_eq!(reader.spec().sample_rate, 24000);
    assert_eq!(reader.spec().bits_per_sample, 16);
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.samples::<i16>().count(), 75);
}

#[tokio::test]
async fn requested_model_is_echoed_in_header() {
    let app = app_with_chunks(vec![chunk(10, None)]);

    let response = app
        .oneshot(post_generate(json!({
            "text": "hello",
            "voice": "x",
            "model": "gemini-2.5-flash-preview-tts"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-model-used"].to_str().unwrap(),
        "gemini-2.5-flash-preview-tts"
    );
}

#[tokio::test]
async fn missing_voice_is_a_field_level_error() {
    let app = app_with_chunks(vec![chunk(10, None)]);

    let response = app
        .oneshot(post_generate(json!({"text": "hello"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("voice"));
}

#[tokio::test]
async fn blank_text_is_a_field_level_error() {
    let app = app_with_chunks(vec![chunk(10, None)]);

    let response = app
        .oneshot(post_generate(json!({"text": "   ", "voice": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("text"));
}

#[tokio::test]
async fn non_json_body_is_rejected() {
    let app = app_with_chunks(vec![chunk(10, None)]);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate-audio")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_stream_is_a_server_error_not_an_empty_wav() {
    let app = app_with_chunks(vec![]);

    let response = app
        .oneshot(post_generate(json!({"text": "hello", "voice": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_message(response).await.contains("no audio"));
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
    let state = AppState::with_provider(AppConfig::default(), Arc::new(FailingProvider));
    let app = api::create_router(state);

    let response = app
        .oneshot(post_generate(json!({"text": "hello", "voice": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(error_message(response).await.contains("model overloaded"));
}

#[tokio::test]
async fn missing_credential_fails_synthesis_but_not_liveness() {
    // No API key configured, so no provider gets built
    let state = AppState::new(AppConfig::default());
    let app = api::create_router(state);

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_generate(json!({"text": "hello", "voice": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let message = error_message(response).await;
    assert!(message.contains("configuration"));
    assert!(!message.contains("GEMINI_API_KEY"));
}
