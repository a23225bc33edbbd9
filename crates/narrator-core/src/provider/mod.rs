//! Speech provider abstraction
//!
//! All vendor-specific call shape lives behind [`SpeechProvider`], so
//! upstream API churn touches the adapter and nothing else. The transport
//! layer and the WAV encoder only ever see [`SpeechChunk`]s.

mod gemini;

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::error::Result;

pub use gemini::GeminiProvider;

/// One synthesis request, with the model already resolved
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Text to narrate
    pub text: String,
    /// Provider voice identifier
    pub voice: String,
    /// Model identifier actually used for the call
    pub model: String,
}

/// One unit of streamed provider output
#[derive(Debug, Clone)]
pub struct SpeechChunk {
    /// Raw little-endian PCM sample bytes
    pub data: Bytes,
    /// Format descriptor for this and subsequent chunks, if the provider
    /// sent one (e.g. `audio/L16;rate=24000`)
    pub mime_type: Option<String>,
}

/// In-order stream of provider chunks for one request
pub type SpeechStream = Pin<Box<dyn Stream<Item = Result<SpeechChunk>> + Send>>;

/// Trait for upstream text-to-speech provider implementations
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Request synthesis of `request.text`, returning the chunk stream
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechStream>;

    /// Get the provider name
    fn name(&self) -> &str;
}
