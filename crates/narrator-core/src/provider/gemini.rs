//! Google Gemini TTS provider adapter
//!
//! Talks to the Generative Language API `streamGenerateContent` endpoint
//! with SSE framing. Audio arrives as base64 `inlineData` parts carrying a
//! MIME descriptor per chunk.

use std::sync::OnceLock;
use std::time::Duration;

use async_stream::try_stream;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use eventsource_stream::Eventsource;
use futures::StreamExt;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

use super::{SpeechChunk, SpeechProvider, SpeechRequest, SpeechStream};

/// Default Google Generative Language API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Common HTTP client, reused across requests to keep connections warm
fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}

/// Gemini TTS provider
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl GeminiProvider {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
        }
    }

    /// Build the `streamGenerateContent` SSE endpoint URL for a model
    fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'a str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn for_speech(request: &'a SpeechRequest) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.text,
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: &request.voice,
                        },
                    },
                },
            },
        }
    }
}

#[derive(Deserialize)]
struct StreamedResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

/// Extract the audio chunks carried by one SSE payload
fn chunks_from(response: StreamedResponse) -> Result<Vec<SpeechChunk>> {
    let mut chunks = Vec::new();

    for candidate in response.candidates {
        let Some(content) = candidate.content else {
            continue;
        };
        for part in content.parts {
            let Some(inline) = part.inline_data else {
                continue;
            };
            let data = BASE64.decode(inline.data.as_bytes())?;
            chunks.push(SpeechChunk {
                data: Bytes::from(data),
                mime_type: inline.mime_type,
            });
        }
    }

    Ok(chunks)
}

#[async_trait]
impl SpeechProvider for GeminiProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechStream> {
        let url = self.stream_url(&request.model);
        let body = GenerateContentRequest::for_speech(request);

        debug!(
            "Gemini TTS request: model={}, voice={}, text_len={}",
            request.model,
            request.voice,
            request.text.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret().as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::UpstreamError(format!("{status}: {error_text}")));
        }

        let stream = try_stream! {
            let mut events = response.bytes_stream().eventsource();
            while let Some(event) = events.next().await {
                let event = event
                    .map_err(|e| Error::UpstreamError(format!("SSE stream error: {e}")))?;
                let payload: StreamedResponse = serde_json::from_str(&event.data)?;
                for chunk in chunks_from(payload)? {
                    yield chunk;
                }
            }
        };

        Ok(Box::pin(stream))
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
