//! Audio generation endpoint

use axum::{
    body::Body,
    extract::State,
    http::{header, Response, StatusCode},
    Json,
};
use futures::StreamExt;
use narrator_core::{audio::wav, Error, PcmAccumulator, SpeechRequest};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

use super::X_MODEL_USED;

/// Request body for `POST /api/generate-audio`
#[derive(Debug, Deserialize)]
pub struct GenerateAudioRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Generate a WAV narration for the given text and voice.
///
/// The whole upstream stream is accumulated before anything is written to
/// the client: the response is either a complete WAV file or a JSON error
/// envelope, never a truncated audio body.
pub async fn generate_audio(
    State(state): State<AppState>,
    body: Option<Json<GenerateAudioRequest>>,
) -> Result<Response<Body>, ApiError> {
    let Some(Json(body)) = body else {
        return Err(ApiError::bad_request("Request body must be valid JSON"));
    };

    let text = body.text.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ApiError::bad_request("The text must not be empty"));
    }

    let voice = body.voice.as_deref().map(str::trim).unwrap_or_default();
    if voice.is_empty() {
        return Err(ApiError::bad_request("The voice must not be empty"));
    }

    let provider = state
        .provider
        .as_ref()
        .ok_or_else(|| Error::MissingCredential("GEMINI_API_KEY".to_string()))?;

    let model = state.config.tts.resolve_model(body.model.as_deref());
    let request_id = Uuid::new_v4();

    info!(
        "[{request_id}] TTS request: {} chars, voice: {voice}, model: {model}",
        text.len()
    );

    let request = SpeechRequest {
        text: text.to_string(),
        voice: voice.to_string(),
        model: model.clone(),
    };

    let mut stream = provider.synthesize(&request).await?;
    let mut accumulator = PcmAccumulator::new();
    while let Some(chunk) = stream.next().await {
        accumulator.push(&chunk?);
    }

    let (pcm, format) = accumulator.finish()?;
    let wav = wav::encode(&pcm, &format);

    info!(
        "[{request_id}] Responding with {} WAV bytes ({} Hz, {}-bit)",
        wav.len(),
        format.sample_rate,
        format.bits_per_sample
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/wav")
        .header(X_MODEL_USED, model)
        .body(Body::from(wav))
        .map_err(|e| ApiError::internal(format!("Failed to build response: {e}")))
}
